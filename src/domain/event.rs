use serde::Serialize;
use serde_json::{Map, Value};

use super::format::format_message;
use super::level::Level;

/// Level descriptor carried on an event, label plus numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventLevel {
    pub label: Level,
    pub value: u8,
}

impl From<Level> for EventLevel {
    fn from(level: Level) -> Self {
        Self {
            label: level,
            value: level.value(),
        }
    }
}

/// A single log call: its level and the arguments it was made with.
///
/// Built once per call, handed to the output channels by reference, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub ts: f64,
    pub level: EventLevel,
    pub messages: Vec<Value>,
    pub bindings: Vec<Map<String, Value>>,
    /// The arguments exactly as a JavaScript caller passed them.
    #[cfg(target_arch = "wasm32")]
    #[serde(skip)]
    pub raw: Option<js_sys::Array>,
}

impl LogEvent {
    pub fn new(level: Level, messages: Vec<Value>, ts: f64) -> Self {
        Self {
            ts,
            level: level.into(),
            messages,
            bindings: Vec::new(),
            #[cfg(target_arch = "wasm32")]
            raw: None,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn with_raw(mut self, raw: js_sys::Array) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn with_bindings(mut self, bindings: Vec<Map<String, Value>>) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn label(&self) -> Level {
        self.level.label
    }

    /// Collapses the event into one object for structured console output.
    ///
    /// Bindings are merged parent-first. A leading object argument is merged
    /// as well, and the first string argument after it becomes `msg`, with its
    /// printf-style placeholders filled from the arguments that follow. Every
    /// argument left over is kept in order under `args`.
    pub fn to_object(&self) -> Value {
        let mut object = Map::new();
        object.insert("time".to_string(), Value::from(self.ts));
        object.insert("level".to_string(), Value::from(self.level.value));

        for binding in &self.bindings {
            for (key, value) in binding {
                object.insert(key.clone(), value.clone());
            }
        }

        let mut rest = self.messages.iter().peekable();
        if let Some(Value::Object(fields)) = rest.peek().copied() {
            for (key, value) in fields {
                object.insert(key.clone(), value.clone());
            }
            rest.next();
        }
        let args: Vec<Value> = if let Some(Value::String(template)) = rest.peek().copied() {
            rest.next();
            let mut args: Vec<Value> = rest.cloned().collect();
            let (msg, used) = format_message(template, &args);
            object.insert("msg".to_string(), Value::String(msg));
            args.drain(..used);
            args
        } else {
            rest.cloned().collect()
        };

        if !args.is_empty() {
            object.insert("args".to_string(), Value::Array(args));
        }

        Value::Object(object)
    }
}
