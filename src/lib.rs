#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod facade;
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod logger;
#[doc(hidden)]
pub mod macros;
pub mod transmit;

pub use adapters::{logger, set_debug_host};
pub use config::{BrowserConfig, LoggerConfig, TransmitConfig};
pub use domain::{ConsoleMethod, DebugHostPolicy, Level, LevelFilter, LogEvent, LoggerError};
pub use logger::{init_log_facade, Logger};
pub use platform::Platform;
pub use transmit::ConsoleTransmit;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    init_log_facade(logger())?;
    Ok(())
}
