pub mod dns;
pub mod errors;
pub mod logging;
pub mod probe;
pub mod records;
pub mod root;
pub mod server;

pub use dns::{DnsConfig, UnresolvedResponse};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use probe::{ProbeConfig, ProbeRule};
pub use records::RecordBinding;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
