use crate::domain::ConsoleMethod;
use crate::ports::ConsolePort;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// One captured console call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
    pub args: Vec<Value>,
}

/// Console that keeps every call in memory instead of printing it.
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    calls: Arc<Mutex<Vec<ConsoleCall>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ConsolePort for RecordingConsole {
    fn write(&self, method: ConsoleMethod, args: &[Value]) {
        self.calls.lock().push(ConsoleCall {
            method,
            args: args.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clones_share_buffer() {
        let console = RecordingConsole::new();
        let handle = console.clone();
        console.write(ConsoleMethod::Info, &[json!("a"), json!(1)]);

        assert_eq!(
            handle.calls(),
            vec![ConsoleCall {
                method: ConsoleMethod::Info,
                args: vec![json!("a"), json!(1)],
            }]
        );

        handle.clear();
        assert!(console.is_empty());
    }
}
