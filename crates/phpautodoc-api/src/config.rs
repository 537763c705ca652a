use serde::{Deserialize, Serialize};

/// Output domain used when none is configured
pub const DEFAULT_DOMAIN: &str = "php";

/// Configuration for markup generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutodocConfig {
    /// Domain label written into every directive header (`.. <domain>:<kind>::`)
    pub domain: String,
}

impl Default for AutodocConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl AutodocConfig {
    /// Set the directive domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}
