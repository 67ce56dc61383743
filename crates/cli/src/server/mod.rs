pub mod dns;
pub mod probe;

pub use dns::start_dns_server;
pub use probe::start_probe_server;
