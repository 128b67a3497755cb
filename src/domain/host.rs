use serde::{Deserialize, Serialize};

/// Substring that marks a development host under the default policy.
pub const DEFAULT_DEBUG_HOST_PATTERN: &str = "local";

/// Decides whether the current host counts as a development host.
///
/// `HostContains` is plain substring sniffing on the host string, so a
/// production host such as `locality.com` also matches. Use `Always` or
/// `Never` where the environment is known up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "pattern")]
pub enum DebugHostPolicy {
    HostContains(String),
    Always,
    Never,
}

impl DebugHostPolicy {
    /// A missing host is evaluated as the empty string.
    pub fn is_debug_host(&self, host: Option<&str>) -> bool {
        match self {
            DebugHostPolicy::HostContains(pattern) => host.unwrap_or("").contains(pattern.as_str()),
            DebugHostPolicy::Always => true,
            DebugHostPolicy::Never => false,
        }
    }
}

impl Default for DebugHostPolicy {
    fn default() -> Self {
        DebugHostPolicy::HostContains(DEFAULT_DEBUG_HOST_PATTERN.to_string())
    }
}
