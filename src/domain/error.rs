use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    UnknownLevel(String),
    InvalidConfig(String),
    LogFacade(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::UnknownLevel(label) => write!(f, "Unknown log level: {}", label),
            LoggerError::InvalidConfig(msg) => write!(f, "Invalid logger config: {}", msg),
            LoggerError::LogFacade(msg) => write!(f, "Log facade setup failed: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl LoggerError {
    pub fn unknown_level(label: impl Into<String>) -> Self {
        LoggerError::UnknownLevel(label.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        LoggerError::InvalidConfig(message.into())
    }
}

impl From<log::SetLoggerError> for LoggerError {
    fn from(err: log::SetLoggerError) -> Self {
        LoggerError::LogFacade(err.to_string())
    }
}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::InvalidConfig(err.to_string())
    }
}

impl From<LoggerError> for JsValue {
    fn from(error: LoggerError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LoggerError::unknown_level("verbose").to_string(),
            "Unknown log level: verbose"
        );
        assert_eq!(
            LoggerError::invalid_config("missing field").to_string(),
            "Invalid logger config: missing field"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoggerError::from(err), LoggerError::InvalidConfig(_)));
    }
}
