use crate::errors::DomainError;
use std::net::Ipv4Addr;

/// Parses a dotted-quad string (`"192.168.1.5"`) into an IPv4 address.
///
/// Exactly four dot-separated decimal values in `0..=255` are accepted;
/// surrounding whitespace, signs and empty octets are rejected.
pub fn parse_dotted_quad(s: &str) -> Result<Ipv4Addr, DomainError> {
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');

    for octet in octets.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| DomainError::InvalidAddress(s.to_string()))?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAddress(s.to_string()));
        }
        *octet = part
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidAddress(s.to_string()))?;
    }

    if parts.next().is_some() {
        return Err(DomainError::InvalidAddress(s.to_string()));
    }

    Ok(Ipv4Addr::from(octets))
}
