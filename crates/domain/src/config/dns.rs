use serde::{Deserialize, Serialize};

/// How an A query with no resolvable address is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedResponse {
    /// Mark the message as a response with rcode NXDOMAIN.
    #[default]
    NameError,
    /// Echo the query header flags untouched with zero answers.
    Unmarked,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    #[serde(default = "default_true")]
    pub upstream_enabled: bool,

    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,

    #[serde(default)]
    pub unresolved_response: UnresolvedResponse,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            answer_ttl: default_answer_ttl(),
            upstream_enabled: true,
            upstream_timeout_ms: default_upstream_timeout_ms(),
            unresolved_response: UnresolvedResponse::default(),
        }
    }
}

fn default_answer_ttl() -> u32 {
    190
}

fn default_upstream_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
