/// Native adapters - implementations for native Rust (non-WASM).

pub mod clock;
pub mod console;
pub mod host;
pub mod recording;

pub use clock::{Clock, FixedClock};
pub use console::Console;
pub use host::{EnvHost as Host, FixedHost};
pub use recording::{ConsoleCall, RecordingConsole};
