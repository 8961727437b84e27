//! Digital I/O abstraction for fixture actuators and detectors.
//!
//! The fixture drives blockers, indicator lights, relays and pistons, and
//! reads board-presence detectors. Physically these sit behind one of two
//! backends, relay channels on the switch/DAQ unit or module+channel points
//! on the discrete I/O card, and the test sequence must not care which.
//! [`DioBackend`] is the sum of the two, fixed per device at construction:
//!
//! - Switch-bound outputs map "on" to closing the (normally open) relay and
//!   "off" to opening it, and always answer the fixed OK token.
//! - I/O-card devices answer the card's own status, passed through
//!   unmodified.
//! - Switch-bound *inputs* are a wiring mistake the type system cannot rule
//!   out (the binding arrives from fixture configuration), so reading one
//!   answers the unsupported-device sentinel instead of touching the
//!   handler.
//!
//! Device wrappers are created once at session setup from a small number of
//! shared handlers and hold nothing but their identity and backend handle.
//! Everything is single-threaded and synchronous; handlers are shared
//! through `Rc<RefCell<..>>` with no locking.

pub mod backend;
pub mod cover;
pub mod point;

pub use backend::{DioBackend, SharedIoCard, SharedSwitch, SwitchBackend};
pub use cover::Cover;
pub use point::{DigitalInput, DigitalOutput, InputRole, OutputRole};
