/// Domain layer - platform-independent log levels, events and host detection.

pub mod error;
pub mod event;
pub mod format;
pub mod host;
pub mod level;

pub use error::LoggerError;
pub use event::{EventLevel, LogEvent};
pub use format::format_message;
pub use host::{DebugHostPolicy, DEFAULT_DEBUG_HOST_PATTERN};
pub use level::{ConsoleMethod, Level, LevelFilter};
