//! Barcode/serial tag scanner.

use fct_core::constants::{SCAN_BAUD, SCAN_FRAME_LEN, SCAN_SETTLE_MS, SCAN_TIMEOUT_MS};
use fct_core::{Error, Result};
use std::io::{Read, Write};
use std::thread;
use std::time::Duration;
use tracing::warn;

use crate::switch::SwitchUnit;
use crate::transport::ScpiTransport;

/// Trigger byte sequence the scanner expects on its serial line.
const TRIGGER: &[u8] = b"T\r\n";

/// Handheld/fixture barcode scanner on a raw serial port.
///
/// The scanner is triggered with `T\r\n` and answers with one fixed-length
/// text frame containing the board serial. A missing port name is a setup
/// error and surfaces immediately. Anything that goes wrong on the wire
/// (port gone, short read, undecodable bytes) reads as "no scan"; the
/// sequencer retriggers by operator action rather than by error handling.
#[derive(Debug)]
pub struct TagScanner {
    port: Option<String>,
    baud: u32,
    timeout: Duration,
    frame_len: usize,
}

impl TagScanner {
    /// Scanner on a named port with the line defaults (115200 baud, 3 s
    /// timeout, 21-byte frame).
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: Some(port.into()),
            baud: SCAN_BAUD,
            timeout: Duration::from_millis(SCAN_TIMEOUT_MS),
            frame_len: SCAN_FRAME_LEN,
        }
    }

    /// Scanner with no port bound yet; [`TagScanner::scan`] errors until
    /// [`TagScanner::set_port`] is called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            port: None,
            baud: SCAN_BAUD,
            timeout: Duration::from_millis(SCAN_TIMEOUT_MS),
            frame_len: SCAN_FRAME_LEN,
        }
    }

    /// Bind or rebind the serial port.
    pub fn set_port(&mut self, port: impl Into<String>) {
        self.port = Some(port.into());
    }

    /// Trigger the scanner and read one tag.
    ///
    /// Returns `Ok(None)` when the port cannot be opened, the read comes
    /// back empty or short-circuited, or the frame is not UTF-8.
    ///
    /// # Errors
    /// [`Error::PortNotConfigured`] when no port has been set; this is the
    /// only error path, and it fires before any I/O.
    pub fn scan(&self) -> Result<Option<String>> {
        let port = self.port.as_deref().ok_or(Error::PortNotConfigured)?;

        let opened = serialport::new(port, self.baud)
            .timeout(self.timeout)
            .open();
        let mut line = match opened {
            Ok(line) => line,
            Err(e) => {
                warn!(target: "fct::scanner", port, error = %e, "scanner port open failed");
                return Ok(None);
            }
        };

        Ok(exchange(
            &mut line,
            self.frame_len,
            Duration::from_millis(SCAN_SETTLE_MS),
        ))
    }

    /// Fire a scan by pulsing a relay on the switch unit instead of the
    /// serial trigger, for fixtures where the scanner's trigger input is
    /// wired through the multiplexer.
    pub fn trigger_via_switch<T: ScpiTransport>(
        &self,
        switch: &mut SwitchUnit<T>,
        channel: u16,
    ) -> Result<()> {
        switch.close_channel(channel)?;
        thread::sleep(Duration::from_millis(SCAN_SETTLE_MS));
        switch.open_channel(channel)
    }
}

/// One trigger/read exchange over any byte stream.
///
/// Split out from [`TagScanner::scan`] so the framing can be tested without
/// a serial port; any failure collapses to `None`.
///
/// The frame may arrive in more than one chunk, so the read loops until
/// `frame_len` bytes are collected or the stream reports end/timeout.
fn exchange<P: Read + Write>(line: &mut P, frame_len: usize, settle: Duration) -> Option<String> {
    line.write_all(TRIGGER).ok()?;
    line.flush().ok()?;
    thread::sleep(settle);

    let mut frame = vec![0u8; frame_len];
    let mut filled = 0;
    while filled < frame_len {
        let n = line.read(&mut frame[filled..]).ok()?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    if filled == 0 {
        return None;
    }
    frame.truncate(filled);
    String::from_utf8(frame).ok()
}
