use std::io;
use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use tracing::debug;

/// Any routable address works: connecting a UDP socket only consults the
/// routing table, nothing is sent.
const ROUTE_PROBE_TARGET: (Ipv4Addr, u16) = (Ipv4Addr::new(192, 0, 2, 1), 53);

/// Whether `addr` can be handed out to other devices on the network.
pub fn is_usable_interface_address(addr: Ipv4Addr) -> bool {
    !addr.is_loopback() && !addr.is_link_local() && !addr.is_unspecified()
}

/// Returns the IPv4 address of the interface carrying the default route.
pub fn detect_local_ipv4() -> io::Result<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(ROUTE_PROBE_TARGET)?;

    let addr = match socket.local_addr()?.ip() {
        IpAddr::V4(v4) => v4,
        IpAddr::V6(v6) => {
            return Err(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("default route uses IPv6 address {}", v6),
            ))
        }
    };

    debug!(address = %addr, "Default route interface address");

    if !is_usable_interface_address(addr) {
        return Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("no usable interface address (default route uses {})", addr),
        ));
    }

    Ok(addr)
}
