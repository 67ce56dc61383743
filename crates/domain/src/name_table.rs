use crate::address::parse_dotted_quad;
use crate::errors::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Reserved key that binds the default address for unmapped names.
pub const WILDCARD: &str = "*";

/// Immutable hostname → IPv4 mapping with an optional wildcard default.
///
/// Built once with [`NameTableBuilder`] before any listener starts and then
/// shared read-only (usually behind an `Arc`). Names are matched
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: HashMap<Arc<str>, Ipv4Addr>,
    wildcard: Option<Ipv4Addr>,
}

impl NameTable {
    pub fn builder() -> NameTableBuilder {
        NameTableBuilder::default()
    }

    /// Exact match only; the wildcard is not consulted.
    pub fn get(&self, name: &str) -> Option<Ipv4Addr> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.entries.get(name.to_ascii_lowercase().as_str()).copied()
        } else {
            self.entries.get(name).copied()
        }
    }

    pub fn wildcard(&self) -> Option<Ipv4Addr> {
        self.wildcard
    }

    pub fn len(&self) -> usize {
        self.entries.len() + usize::from(self.wildcard.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct NameTableBuilder {
    table: NameTable,
}

impl NameTableBuilder {
    /// Binds `name` to a dotted-quad `address`. `"*"` sets the wildcard.
    ///
    /// Re-binding a name replaces the previous address. Bind order never
    /// affects precedence: exact entries always outrank the wildcard.
    pub fn bind(&mut self, name: &str, address: &str) -> Result<&mut Self, DomainError> {
        let addr = parse_dotted_quad(address)?;
        Ok(self.bind_addr(name, addr))
    }

    pub fn bind_addr(&mut self, name: &str, address: Ipv4Addr) -> &mut Self {
        let name = name.trim().trim_end_matches('.');
        if name == WILDCARD {
            self.table.wildcard = Some(address);
        } else {
            self.table
                .entries
                .insert(name.to_ascii_lowercase().into(), address);
        }
        self
    }

    pub fn build(self) -> NameTable {
        self.table
    }
}
