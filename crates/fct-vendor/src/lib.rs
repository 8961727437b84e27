//! Facades for the two vendor libraries on the fixture PC.
//!
//! The color analyzer and the discrete I/O card both ship as native
//! libraries with fixed entry points. Their call shapes are reproduced here
//! as traits ([`FeasaLink`], [`IoPortLink`]) so the rest of the harness
//! never touches a raw handle, and mock implementations stand in for the
//! hardware during development and tests.
//!
//! The entry-point signatures are a file boundary: they follow the vendor
//! headers, not Rust taste. Everything above the traits is ordinary Rust.

pub mod feasa;
pub mod ioport;

pub use feasa::{ColorSensor, FeasaLink, MockFeasa};
pub use ioport::{IoPortLink, MockIoCard};
