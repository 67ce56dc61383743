use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS packet: {0}")]
    MalformedPacket(String),

    #[error("Upstream resolution failed: {0}")]
    UpstreamResolutionFailure(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("Query timeout")]
    QueryTimeout,
}
