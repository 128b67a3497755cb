/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The logger and its transmission hook only talk to the console, the host
/// location and the clock through these traits, so the same code runs in the
/// browser and in native tests.

pub mod clock;
pub mod console;
pub mod host;
pub mod transmit;

pub use clock::ClockPort;
pub use console::ConsolePort;
pub use host::HostPort;
pub use transmit::TransmitPort;
