use crate::ports::HostPort;
use std::env;

pub const HOST_ENV_VAR: &str = "DEVCONSOLE_HOST";

/// Native stand-in for `location.host`, read from the environment on each call.
#[derive(Debug, Clone, Copy)]
pub struct EnvHost;

impl EnvHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPort for EnvHost {
    fn host(&self) -> Option<String> {
        env::var(HOST_ENV_VAR).ok()
    }
}

/// Host fixed at construction time.
#[derive(Debug, Clone, Default)]
pub struct FixedHost(Option<String>);

impl FixedHost {
    pub fn new(host: impl Into<String>) -> Self {
        Self(Some(host.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl HostPort for FixedHost {
    fn host(&self) -> Option<String> {
        self.0.clone()
    }
}
