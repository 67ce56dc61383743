use serde::{Deserialize, Serialize};

/// Canned reply for requests carrying a matching `Host:` header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProbeRule {
    pub host: String,
    pub body: String,
}

impl ProbeRule {
    pub fn new(host: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_fallback_body")]
    pub fallback_body: String,

    #[serde(default = "default_extra_headers")]
    pub extra_headers: Vec<String>,

    #[serde(default = "default_rules")]
    pub rules: Vec<ProbeRule>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fallback_body: default_fallback_body(),
            extra_headers: default_extra_headers(),
            rules: default_rules(),
        }
    }
}

const CONNTEST_PAGE: &str = "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
\"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\">\n\
<html>\n<head>\n<title>HTML Page</title>\n</head>\n\
<body bgcolor=\"#FFFFFF\">\nThis is test.html page\n</body>\n</html>\n";

fn default_true() -> bool {
    true
}

fn default_fallback_body() -> String {
    "What's your problem?".to_string()
}

fn default_extra_headers() -> Vec<String> {
    vec!["X-Organization: Nintendo".to_string()]
}

fn default_rules() -> Vec<ProbeRule> {
    vec![
        ProbeRule::new("conntest.nintendowifi.net", CONNTEST_PAGE),
        ProbeRule::new("ctest.cdn.nintendo.net", "ok"),
    ]
}
