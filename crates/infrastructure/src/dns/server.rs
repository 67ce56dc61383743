use super::codec::Message;
use super::wire_response::{assemble, ResponseOptions};
use forge_dns_application::use_cases::ResolveNameUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Per-datagram dispatch: decode, resolve, encode.
///
/// Holds no per-client state; every datagram is handled on its own against
/// the shared read-only name table.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveNameUseCase>,
    options: ResponseOptions,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveNameUseCase>, options: ResponseOptions) -> Self {
        Self { use_case, options }
    }

    /// Returns the bytes to send back to `client`, or `None` to drop the
    /// datagram.
    pub async fn handle_datagram(&self, buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match Message::decode(buf) {
            Ok(query) => query,
            Err(e) => {
                error!(client = %client, bytes = buf.len(), error = %e, "Dropping malformed DNS packet");
                return None;
            }
        };

        if !query.question.is_address_query() {
            debug!(
                client = %client,
                name = %query.question.name.as_str(),
                qtype = query.question.qtype,
                "Echoing non-A query unchanged"
            );
            return Some(buf.to_vec());
        }

        let name = query.question.name.as_str();
        let resolution = self.use_case.execute(name).await;

        match resolution.address {
            Some(address) => info!(
                client = %client.ip(),
                name = %name,
                address = %address,
                source = %resolution.source,
                "DNS query resolved"
            ),
            None => info!(
                client = %client.ip(),
                name = %name,
                address = "none",
                source = %resolution.source,
                "DNS query unresolved"
            ),
        }

        Some(assemble(&query, &resolution, &self.options).encode())
    }
}
