use crate::address::parse_dotted_quad;
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A static name-table entry from the `[[records]]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecordBinding {
    pub name: String,

    /// Dotted-quad address. `None` binds the name to the server's own address.
    #[serde(default)]
    pub address: Option<String>,
}

impl RecordBinding {
    pub fn new(name: impl Into<String>, address: Option<&str>) -> Self {
        Self {
            name: name.into(),
            address: address.map(str::to_string),
        }
    }

    pub fn resolve_address(&self, self_address: Ipv4Addr) -> Result<Ipv4Addr, DomainError> {
        match self.address.as_deref() {
            Some(address) => parse_dotted_quad(address),
            None => Ok(self_address),
        }
    }
}

pub fn default_records() -> Vec<RecordBinding> {
    vec![
        RecordBinding::new("*", Some("0.0.0.0")),
        RecordBinding::new("ctest.cdn.nintendo.net", None),
        RecordBinding::new("conntest.nintendowifi.net", None),
        RecordBinding::new("test.test.test", None),
        RecordBinding::new("test.test", None),
    ]
}
