//! Plain HTTP/1.0 responder for device connectivity probes.
//!
//! Only the `Host:` header of the first read chunk is looked at; there is no
//! request parsing beyond a substring match.

use forge_dns_domain::config::ProbeConfig;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

pub const MAX_REQUEST_LEN: usize = 1024;
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Picks the body of the first rule whose `Host: <host>\r\n` line occurs in
/// `request`, or the fallback body.
pub fn select_body<'a>(request: &str, config: &'a ProbeConfig) -> &'a str {
    config
        .rules
        .iter()
        .find(|rule| request.contains(&format!("Host: {}\r\n", rule.host)))
        .map(|rule| rule.body.as_str())
        .unwrap_or(config.fallback_body.as_str())
}

pub fn render_response(request: &[u8], config: &ProbeConfig) -> Vec<u8> {
    let request = String::from_utf8_lossy(request);
    let body = select_body(&request, config);

    let mut response = format!(
        "HTTP/1.0 200 OK\r\nContent-Length: {}\r\nContent-Type: text/html\r\n",
        body.len()
    );
    for header in &config.extra_headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    response.push_str(body);

    response.into_bytes()
}

/// TCP accept loop answering one connection at a time.
pub struct ProbeResponder {
    listener: TcpListener,
    config: Arc<ProbeConfig>,
}

impl ProbeResponder {
    pub async fn bind(addr: SocketAddr, config: Arc<ProbeConfig>) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, config })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) -> io::Result<()> {
        let local_addr = self.local_addr()?;
        info!(address = %local_addr.ip(), port = local_addr.port(), "Probe responder listening");

        loop {
            let (stream, peer_addr) = match self.listener.accept().await {
                Ok(r) => r,
                Err(e) => {
                    error!(error = %e, "Probe accept error");
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };

            if let Err(e) = self.handle_connection(stream, peer_addr).await {
                error!(client = %peer_addr, error = %e, "Probe connection failed");
            }
        }
    }

    async fn handle_connection(&self, mut stream: TcpStream, peer_addr: SocketAddr) -> io::Result<()> {
        let mut buf = [0u8; MAX_REQUEST_LEN];
        let n = tokio::time::timeout(READ_TIMEOUT, stream.read(&mut buf))
            .await
            .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "probe request read timed out"))??;

        let request = &buf[..n];
        info!(
            client = %peer_addr,
            request = %String::from_utf8_lossy(request).trim(),
            "Probe request received"
        );

        let response = render_response(request, &self.config);
        stream.write_all(&response).await?;
        stream.shutdown().await?;

        debug!(client = %peer_addr, bytes = response.len(), "Probe response sent");
        Ok(())
    }
}
