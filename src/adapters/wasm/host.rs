use crate::global::{window, worker_scope};
use crate::ports::HostPort;

/// Reads `location.host` from the window, or from the worker's location.
#[derive(Debug, Clone, Copy)]
pub struct LocationHost;

impl LocationHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocationHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPort for LocationHost {
    fn host(&self) -> Option<String> {
        if let Some(worker) = worker_scope() {
            return Some(worker.location().host());
        }
        window()?.location().host().ok()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_host_available_in_browser() {
        let host = LocationHost::new().host();
        assert!(host.is_some(), "Browser should expose location.host");
    }
}
