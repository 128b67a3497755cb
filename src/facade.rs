/// JavaScript entry points for the global logger.
///
/// Every function here swallows bad input: a log call from the application
/// never throws. Arguments reach the console as the caller passed them.
use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::adapters::global_logger;
use crate::domain::Level;

fn emit(level: Level, messages: Vec<JsValue>) {
    global_logger::logger().log_js(level, messages.into_iter().collect::<Array>());
}

/// Logs `messages` at the level named by `level`. Unknown labels are dropped.
#[wasm_bindgen]
pub fn log(level: &str, messages: Vec<JsValue>) {
    if let Ok(level) = level.parse::<Level>() {
        emit(level, messages);
    }
}

#[wasm_bindgen(js_name = logTrace)]
pub fn log_trace(messages: Vec<JsValue>) {
    emit(Level::Trace, messages);
}

#[wasm_bindgen(js_name = logDebug)]
pub fn log_debug(messages: Vec<JsValue>) {
    emit(Level::Debug, messages);
}

#[wasm_bindgen(js_name = logInfo)]
pub fn log_info(messages: Vec<JsValue>) {
    emit(Level::Info, messages);
}

#[wasm_bindgen(js_name = logWarn)]
pub fn log_warn(messages: Vec<JsValue>) {
    emit(Level::Warn, messages);
}

#[wasm_bindgen(js_name = logError)]
pub fn log_error(messages: Vec<JsValue>) {
    emit(Level::Error, messages);
}

#[wasm_bindgen(js_name = logFatal)]
pub fn log_fatal(messages: Vec<JsValue>) {
    emit(Level::Fatal, messages);
}

/// `true`/`false` forces console mirroring on or off, `undefined` restores
/// host detection.
#[wasm_bindgen(js_name = setDebugHost)]
pub fn set_debug_host(enabled: Option<bool>) {
    global_logger::set_debug_host(enabled);
}

#[wasm_bindgen(js_name = loggerLevel)]
pub fn logger_level() -> String {
    global_logger::logger().level().to_string()
}
