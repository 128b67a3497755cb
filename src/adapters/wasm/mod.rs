/// WASM adapters - implementations using browser APIs.

pub mod clock;
pub mod console;
pub mod converters;
pub mod host;

pub use clock::Clock;
pub use console::Console;
pub use host::LocationHost as Host;
