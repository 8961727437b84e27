//! Per-day result log for the test station.
//!
//! One tab-separated file per calendar day, named `<base> <YYYY-MM-DD>.csv`.
//! The file is created with its header the first time the station logs that
//! day and reused afterwards; every row is written with an open-append-close
//! cycle so a crash between boards never holds a dirty handle.

pub mod daily;

pub use daily::DailyCsv;
