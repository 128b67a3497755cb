use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// Severity of a single log call, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// Numeric value written into structured events.
    pub fn value(&self) -> u8 {
        match self {
            Level::Trace => 10,
            Level::Debug => 20,
            Level::Info => 30,
            Level::Warn => 40,
            Level::Error => 50,
            Level::Fatal => 60,
        }
    }

    /// The console has no `fatal` method, so fatal events go to `error`.
    pub fn console_method(&self) -> ConsoleMethod {
        match self {
            Level::Trace => ConsoleMethod::Trace,
            Level::Debug => ConsoleMethod::Debug,
            Level::Info => ConsoleMethod::Info,
            Level::Warn => ConsoleMethod::Warn,
            Level::Error | Level::Fatal => ConsoleMethod::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(LoggerError::unknown_level(other)),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

/// Minimum severity a channel lets through. `Silent` lets nothing through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilter {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Silent,
}

impl LevelFilter {
    pub fn admits(&self, level: Level) -> bool {
        match self.min_level() {
            Some(min) => level >= min,
            None => false,
        }
    }

    pub fn min_level(&self) -> Option<Level> {
        match self {
            LevelFilter::Trace => Some(Level::Trace),
            LevelFilter::Debug => Some(Level::Debug),
            LevelFilter::Info => Some(Level::Info),
            LevelFilter::Warn => Some(Level::Warn),
            LevelFilter::Error => Some(Level::Error),
            LevelFilter::Fatal => Some(Level::Fatal),
            LevelFilter::Silent => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.min_level() {
            Some(level) => level.as_str(),
            None => "silent",
        }
    }

    pub(crate) fn to_log_filter(self) -> log::LevelFilter {
        match self {
            LevelFilter::Trace => log::LevelFilter::Trace,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Error | LevelFilter::Fatal => log::LevelFilter::Error,
            LevelFilter::Silent => log::LevelFilter::Off,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            Level::Error => LevelFilter::Error,
            Level::Fatal => LevelFilter::Fatal,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "silent" {
            return Ok(LevelFilter::Silent);
        }
        s.parse::<Level>().map(LevelFilter::from)
    }
}

/// Output methods available on the console surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Trace => "trace",
            ConsoleMethod::Debug => "debug",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_method_matches_label_except_fatal() {
        for level in Level::ALL {
            let method = level.console_method();
            if level == Level::Fatal {
                assert_eq!(method, ConsoleMethod::Error);
            } else {
                assert_eq!(method.as_str(), level.as_str());
            }
        }
    }

    #[test]
    fn test_level_parse() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::UnknownLevel(label)) if label == "verbose"
        ));
        assert!("silent".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error < Level::Fatal);
        assert_eq!(Level::Info.value(), 30);
        assert_eq!(Level::Fatal.value(), 60);
    }

    #[test]
    fn test_silent_admits_nothing() {
        for level in Level::ALL {
            assert!(!LevelFilter::Silent.admits(level));
        }
    }

    #[test]
    fn test_debug_filter_threshold() {
        let filter = LevelFilter::Debug;
        assert!(!filter.admits(Level::Trace));
        assert!(filter.admits(Level::Debug));
        assert!(filter.admits(Level::Fatal));
    }

    #[test]
    fn test_level_filter_parse() {
        assert_eq!("silent".parse::<LevelFilter>().unwrap(), LevelFilter::Silent);
        assert_eq!("warn".parse::<LevelFilter>().unwrap(), LevelFilter::Warn);
        assert!("loud".parse::<LevelFilter>().is_err());
    }

    #[test]
    fn test_level_filter_serde() {
        let filter: LevelFilter = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(filter, LevelFilter::Silent);
        assert_eq!(serde_json::to_string(&Level::Fatal).unwrap(), "\"fatal\"");
    }
}
