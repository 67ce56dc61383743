//! forge-dns domain layer
pub mod address;
pub mod config;
pub mod errors;
pub mod name_table;
pub mod resolution;

pub use address::parse_dotted_quad;
pub use config::{CliOverrides, Config, ConfigError, UnresolvedResponse};
pub use errors::DomainError;
pub use name_table::{NameTable, NameTableBuilder, WILDCARD};
pub use resolution::{Resolution, ResolutionSource};
