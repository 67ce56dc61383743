use forge_dns_domain::{parse_dotted_quad, DomainError};
use std::net::Ipv4Addr;

#[test]
fn test_parse_valid_addresses() {
    assert_eq!(
        parse_dotted_quad("192.168.1.5").unwrap(),
        Ipv4Addr::new(192, 168, 1, 5)
    );
    assert_eq!(parse_dotted_quad("0.0.0.0").unwrap(), Ipv4Addr::UNSPECIFIED);
    assert_eq!(
        parse_dotted_quad("255.255.255.255").unwrap(),
        Ipv4Addr::BROADCAST
    );
}

#[test]
fn test_parse_accepts_leading_zeros_as_decimal() {
    assert_eq!(
        parse_dotted_quad("010.001.000.009").unwrap(),
        Ipv4Addr::new(10, 1, 0, 9)
    );
}

#[test]
fn test_parse_rejects_malformed_addresses() {
    for input in [
        "",
        "1.2.3",
        "1.2.3.4.5",
        "1.2.3.256",
        "1..3.4",
        "1.2.3.-4",
        "1.2.3.+4",
        " 1.2.3.4",
        "a.b.c.d",
        "::1",
        "1.2.3.0004",
    ] {
        let result = parse_dotted_quad(input);
        assert!(
            matches!(result, Err(DomainError::InvalidAddress(_))),
            "expected InvalidAddress for {:?}, got {:?}",
            input,
            result
        );
    }
}
