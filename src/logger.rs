use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::config::LoggerConfig;
use crate::domain::{Level, LevelFilter, LogEvent, LoggerError};
use crate::platform::Platform;
use crate::ports::{ClockPort, ConsolePort, TransmitPort};
use crate::transmit::ConsoleTransmit;

/// Logging handle with two independent channels.
///
/// - the normal output path, gated by `config.level` and written straight to
///   the console;
/// - the transmission channel, gated by the transmit level and handed to a
///   [`TransmitPort`] hook.
///
/// An event reaches each channel whose threshold it passes, so a `silent`
/// logger still feeds its hook.
#[derive(Clone)]
pub struct Logger {
    config: Arc<LoggerConfig>,
    transmit: Option<Arc<dyn TransmitPort>>,
    console: Arc<dyn ConsolePort>,
    clock: Arc<dyn ClockPort>,
    bindings: Vec<Map<String, Value>>,
}

impl Logger {
    /// Builds a logger whose hook is a [`ConsoleTransmit`] when the config
    /// asks for transmission.
    pub fn new(config: LoggerConfig, platform: &Platform) -> Self {
        let transmit = config.browser.transmit.as_ref().map(|_| {
            Arc::new(ConsoleTransmit::new(config.debug_host(), platform)) as Arc<dyn TransmitPort>
        });
        Self::with_transmit(config, platform, transmit)
    }

    pub fn with_transmit(
        config: LoggerConfig,
        platform: &Platform,
        transmit: Option<Arc<dyn TransmitPort>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            transmit,
            console: platform.console(),
            clock: platform.clock(),
            bindings: Vec::new(),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn level(&self) -> LevelFilter {
        self.config.level
    }

    /// Whether the normal output path writes events of this level.
    pub fn is_level_enabled(&self, level: Level) -> bool {
        self.config.level.admits(level)
    }

    /// Whether events of this level reach the transmission hook.
    pub fn is_transmit_enabled(&self, level: Level) -> bool {
        self.transmit.is_some()
            && self
                .config
                .transmit_level()
                .is_some_and(|filter| filter.admits(level))
    }

    /// Logger sharing this one's config and hook, with one more binding set.
    pub fn child(&self, bindings: Map<String, Value>) -> Logger {
        let mut child = self.clone();
        child.bindings.push(bindings);
        child
    }

    pub fn bindings(&self) -> &[Map<String, Value>] {
        &self.bindings
    }

    pub fn log(&self, level: Level, messages: Vec<Value>) {
        if !self.is_level_enabled(level) && !self.is_transmit_enabled(level) {
            return;
        }
        self.emit(self.event(level, messages));
    }

    /// Logs JavaScript values. The console receives them untouched; the
    /// structured form and Rust hooks see their JSON view.
    #[cfg(target_arch = "wasm32")]
    pub fn log_js(&self, level: Level, args: js_sys::Array) {
        if !self.is_level_enabled(level) && !self.is_transmit_enabled(level) {
            return;
        }
        let messages = crate::adapters::wasm::converters::messages_from_js(&args);
        self.emit(self.event(level, messages).with_raw(args));
    }

    fn event(&self, level: Level, messages: Vec<Value>) -> LogEvent {
        LogEvent::new(level, messages, self.clock.now()).with_bindings(self.bindings.clone())
    }

    fn emit(&self, event: LogEvent) {
        let level = event.label();
        if self.is_level_enabled(level) {
            self.write(&event);
        }
        if self.is_transmit_enabled(level) {
            if let Some(hook) = &self.transmit {
                hook.send(level, &event);
            }
        }
    }

    fn write(&self, event: &LogEvent) {
        let method = event.label().console_method();
        if self.config.browser.as_object {
            self.console.write(method, &[event.to_object()]);
            return;
        }
        #[cfg(target_arch = "wasm32")]
        if let Some(raw) = &event.raw {
            self.console.write_raw(method, raw);
            return;
        }
        self.console.write(method, &event.messages);
    }

    pub fn trace(&self, messages: Vec<Value>) {
        self.log(Level::Trace, messages);
    }

    pub fn debug(&self, messages: Vec<Value>) {
        self.log(Level::Debug, messages);
    }

    pub fn info(&self, messages: Vec<Value>) {
        self.log(Level::Info, messages);
    }

    pub fn warn(&self, messages: Vec<Value>) {
        self.log(Level::Warn, messages);
    }

    pub fn error(&self, messages: Vec<Value>) {
        self.log(Level::Error, messages);
    }

    pub fn fatal(&self, messages: Vec<Value>) {
        self.log(Level::Fatal, messages);
    }

    /// Most permissive of the two thresholds, in `log` crate terms.
    fn max_log_filter(&self) -> log::LevelFilter {
        let output = self.config.level.to_log_filter();
        let transmit = match (&self.transmit, self.config.transmit_level()) {
            (Some(_), Some(filter)) => filter.to_log_filter(),
            _ => log::LevelFilter::Off,
        };
        output.max(transmit)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("transmit", &self.transmit.is_some())
            .field("bindings", &self.bindings)
            .finish()
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let level = Level::from(metadata.level());
        self.is_level_enabled(level) || self.is_transmit_enabled(level)
    }

    fn log(&self, record: &log::Record) {
        Logger::log(
            self,
            Level::from(record.level()),
            vec![Value::String(record.args().to_string())],
        );
    }

    fn flush(&self) {}
}

/// Routes the `log` crate macros into `logger`. Can only succeed once per process.
pub fn init_log_facade(logger: &'static Logger) -> Result<(), LoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(logger.max_log_filter());
    Ok(())
}
