use super::server::DnsServerHandler;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time;
use tracing::{error, info, trace};

const RECV_BUFFER_SIZE: usize = 4096;

/// UDP receive loop for the DNS responder.
///
/// Datagrams are handled strictly one at a time in arrival order.
pub struct UdpResponder {
    socket: UdpSocket,
    handler: Arc<DnsServerHandler>,
}

impl UdpResponder {
    pub async fn bind(addr: SocketAddr, handler: Arc<DnsServerHandler>) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        Ok(Self { socket, handler })
    }

    /// Wraps an already bound std socket (e.g. one configured via socket2).
    pub fn from_std(socket: std::net::UdpSocket, handler: Arc<DnsServerHandler>) -> io::Result<Self> {
        socket.set_nonblocking(true)?;
        let socket = UdpSocket::from_std(socket)?;
        Ok(Self { socket, handler })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Runs until the task is dropped. Single-datagram failures never end
    /// the loop.
    pub async fn run(self) -> io::Result<()> {
        let local_addr = self.local_addr()?;
        info!(address = %local_addr.ip(), port = local_addr.port(), "DNS responder listening");

        let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

        loop {
            let (n, peer_addr) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(r) => r,
                // ICMP port-unreachable from an earlier reply surfaces here on some platforms
                Err(e) if e.kind() == io::ErrorKind::ConnectionReset => continue,
                Err(e) => {
                    error!(error = %e, "DNS UDP recv error");
                    time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };

            trace!(bytes = n, client = %peer_addr, "DNS datagram received");

            let Some(response) = self.handler.handle_datagram(&recv_buf[..n], peer_addr).await
            else {
                continue;
            };

            if let Err(e) = self.socket.send_to(&response, peer_addr).await {
                error!(client = %peer_addr, error = %e, "Failed to send DNS response");
            }
        }
    }
}
