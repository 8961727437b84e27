//! SCPI instrument wrappers for the FCT fixture.
//!
//! The fixture talks to two SCPI instruments over a VISA-style resource
//! connection (a switch/DAQ unit and a programmable power source) and to a
//! barcode scanner over a raw serial port. This crate wraps each of them
//! behind thin typed APIs:
//!
//! - [`ScpiTransport`] is the seam between the wrappers and the physical
//!   connection, so the same drivers run against real hardware or against
//!   [`MockTransport`] in tests.
//! - [`SwitchUnit`] multiplexes relays and measures resistance/DC voltage.
//! - [`PowerSource`] programs and measures the supply channels.
//! - [`TagScanner`] triggers the barcode scanner and reads its fixed-length
//!   frame.
//!
//! All calls are direct blocking calls; the fixture runs one test sequence
//! at a time and nothing here is shared across threads.

pub mod mock;
pub mod power;
pub mod scanner;
pub mod switch;
pub mod transport;

pub use mock::{MockTransport, MockTransportHandle};
pub use power::{PowerSource, SourceChannel};
pub use scanner::TagScanner;
pub use switch::SwitchUnit;
pub use transport::ScpiTransport;
