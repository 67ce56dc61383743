use std::fmt;
use std::net::Ipv4Addr;

/// Where a resolved answer address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    Table,
    Wildcard,
    Upstream,
    None,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Table => "table",
            ResolutionSource::Wildcard => "wildcard",
            ResolutionSource::Upstream => "upstream",
            ResolutionSource::None => "none",
        }
    }
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub address: Option<Ipv4Addr>,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn found(address: Ipv4Addr, source: ResolutionSource) -> Self {
        Self {
            address: Some(address),
            source,
        }
    }

    pub fn none() -> Self {
        Self {
            address: None,
            source: ResolutionSource::None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.address.is_some()
    }
}
