use crate::domain::ConsoleMethod;
use crate::ports::ConsolePort;
use serde_json::Value;

/// Native console implementation using stdout/stderr.
///
/// Strings are printed as-is, every other value as compact JSON, separated by
/// single spaces the way a browser console joins its arguments.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn render(args: &[Value]) -> String {
        args.iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for Console {
    fn write(&self, method: ConsoleMethod, args: &[Value]) {
        let line = Self::render(args);
        match method {
            ConsoleMethod::Trace => println!("[TRACE] {line}"),
            ConsoleMethod::Debug => println!("[DEBUG] {line}"),
            ConsoleMethod::Info => println!("[INFO] {line}"),
            ConsoleMethod::Warn => eprintln!("[WARN] {line}"),
            ConsoleMethod::Error => eprintln!("[ERROR] {line}"),
        }
    }
}
