//! Electrical and transport defaults for the FCT harness.
//!
//! These values come from the fixture wiring and the vendor defaults the
//! line was commissioned with. Changing them changes pass/fail behavior on
//! the line, so they live in one place.

// ============================================================================
// Cover sense (analog, through the switch unit)
// ============================================================================

/// A cover loop measuring below this resistance counts as closed.
///
/// # Value: 500 Ω
pub const COVER_CLOSED_MAX_OHMS: f64 = 500.0;

/// Sentinel resistance substituted when the cover loop cannot be read.
///
/// A failed read is indistinguishable from an open loop by design; the
/// fixture treats both as "cover open".
///
/// # Value: 999 999 Ω
pub const OPEN_CIRCUIT_OHMS: f64 = 999_999.0;

// ============================================================================
// Switch unit measurement defaults
// ============================================================================

/// Default range argument for `MEAS:RES?` (ohms).
pub const DEFAULT_OHM_RANGE: u32 = 100_000;

/// Default resolution argument for `MEAS:RES?`.
pub const DEFAULT_OHM_RESOLUTION: f64 = 0.03;

/// Default range argument for `MEAS:VOLT:DC?` (volts).
pub const DEFAULT_VOLT_RANGE: u32 = 10;

// ============================================================================
// Barcode scanner serial framing
// ============================================================================

/// Scanner serial baud rate.
pub const SCAN_BAUD: u32 = 115_200;

/// Scanner serial read timeout (milliseconds).
pub const SCAN_TIMEOUT_MS: u64 = 3_000;

/// Settle time between the trigger write and the frame read (milliseconds).
pub const SCAN_SETTLE_MS: u64 = 1_000;

/// Fixed length of the scanner's response frame (bytes).
pub const SCAN_FRAME_LEN: usize = 21;

// ============================================================================
// Color analyzer session defaults
// ============================================================================

/// Response buffer size handed to the vendor library (bytes).
pub const FEASA_BUFFER_LEN: usize = 32;

/// Default analyzer port number.
pub const FEASA_DEFAULT_PORT: i32 = 4;

/// Response timeout set once at session construction (milliseconds).
pub const FEASA_RESPONSE_TIMEOUT_MS: u32 = 8_000;

/// Default analyzer baud rate, as the vendor library expects it.
pub const FEASA_DEFAULT_BAUD: &[u8] = b"57600";
