//! Color analyzer (fiber RGB) session.

use fct_core::constants::{
    FEASA_BUFFER_LEN, FEASA_DEFAULT_BAUD, FEASA_DEFAULT_PORT, FEASA_RESPONSE_TIMEOUT_MS,
};
use fct_core::{Error, Result, Rgb};
use tracing::warn;

/// Entry points of the color-analyzer library.
///
/// Return codes follow the vendor convention: `open`/`close` answer 0 on
/// success, `send` answers 1 on success and fills `response` with a
/// NUL-terminated reply. Do not reinterpret the codes here; the
/// [`ColorSensor`] wrapper owns that mapping.
pub trait FeasaLink {
    fn open(&mut self, port: i32, baud: &[u8]) -> i32;
    fn close(&mut self, port: i32) -> i32;
    fn send(&mut self, port: i32, command: &[u8], response: &mut [u8]) -> i32;
    fn enum_ports(&mut self) -> i32;
    fn set_response_timeout(&mut self, timeout_ms: u32) -> i32;
}

/// One session with the fiber color analyzer.
///
/// Holds the port, baud and response buffer the vendor library works
/// against. The response timeout is set once at construction and not
/// renegotiated afterwards.
#[derive(Debug)]
pub struct ColorSensor<L: FeasaLink> {
    link: L,
    port: i32,
    baud: Vec<u8>,
    buffer: Vec<u8>,
}

impl<L: FeasaLink> ColorSensor<L> {
    /// Session with the line defaults (port 4, 57600 baud, 32-byte buffer).
    pub fn new(link: L) -> Self {
        Self::with_port(link, FEASA_DEFAULT_PORT)
    }

    /// Session on an explicit analyzer port.
    pub fn with_port(mut link: L, port: i32) -> Self {
        link.set_response_timeout(FEASA_RESPONSE_TIMEOUT_MS);
        Self {
            link,
            port,
            baud: FEASA_DEFAULT_BAUD.to_vec(),
            buffer: vec![0u8; FEASA_BUFFER_LEN],
        }
    }

    /// Rebind the analyzer port for the next `open`.
    pub fn set_port(&mut self, port: i32) {
        self.port = port;
    }

    /// Rebind the baud rate for the next `open`.
    pub fn set_baud(&mut self, baud: &[u8]) {
        self.baud = baud.to_vec();
    }

    /// Open the analyzer connection.
    ///
    /// # Errors
    /// [`Error::ConnectionFailed`] when the library answers a nonzero code.
    pub fn open(&mut self) -> Result<()> {
        let code = self.link.open(self.port, &self.baud);
        if code != 0 {
            return Err(Error::connection(format!(
                "color analyzer open on port {} answered {code}",
                self.port
            )));
        }
        Ok(())
    }

    /// Close the analyzer connection.
    ///
    /// # Errors
    /// [`Error::ConnectionFailed`] when the library answers a nonzero code.
    pub fn close(&mut self) -> Result<()> {
        let code = self.link.close(self.port);
        if code != 0 {
            return Err(Error::connection(format!(
                "color analyzer close on port {} answered {code}",
                self.port
            )));
        }
        Ok(())
    }

    /// Capture and read the RGB values of one fiber.
    ///
    /// Triggers a capture, then asks for `Getrgbi<fiber>` and parses the
    /// space-separated reply. Any library refusal or unparseable reply is
    /// "no reading".
    pub fn get_rgb(&mut self, fiber: u8) -> Option<Rgb> {
        self.link.send(self.port, b"Capture", &mut self.buffer);

        let command = format!("Getrgbi{fiber:02}");
        let code = self
            .link
            .send(self.port, command.as_bytes(), &mut self.buffer);
        if code != 1 {
            warn!(target: "fct::feasa", fiber, code, "analyzer refused RGB read");
            return None;
        }
        parse_rgb(&self.buffer)
    }

    /// Read several fibers, giving up on the first one that fails.
    pub fn get_rgbs(&mut self, fibers: &[u8]) -> Option<Vec<Rgb>> {
        let mut readings = Vec::with_capacity(fibers.len());
        for &fiber in fibers {
            readings.push(self.get_rgb(fiber)?);
        }
        Some(readings)
    }
}

/// Decode a NUL-terminated "r g b" reply.
fn parse_rgb(buffer: &[u8]) -> Option<Rgb> {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    let text = std::str::from_utf8(&buffer[..end]).ok()?;

    let mut parts = text.split_whitespace();
    let r = parts.next()?.parse().ok()?;
    let g = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    Some(Rgb::new(r, g, b))
}

/// Mock analyzer library with scripted per-fiber readings.
#[derive(Debug, Default)]
pub struct MockFeasa {
    readings: std::collections::HashMap<u8, Rgb>,
    refuse_open: bool,
    opened: bool,
    timeout_ms: Option<u32>,
    captures: u32,
}

impl MockFeasa {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reading answered for one fiber. Fibers without a scripted
    /// reading refuse the read, like a dark fiber does.
    pub fn set_reading(&mut self, fiber: u8, rgb: Rgb) {
        self.readings.insert(fiber, rgb);
    }

    /// Make `open` answer a failure code.
    pub fn refuse_open(&mut self) {
        self.refuse_open = true;
    }

    /// Number of `Capture` commands seen.
    #[must_use]
    pub fn captures(&self) -> u32 {
        self.captures
    }

    /// Response timeout last set on the link, if any.
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u32> {
        self.timeout_ms
    }
}

impl FeasaLink for MockFeasa {
    fn open(&mut self, _port: i32, _baud: &[u8]) -> i32 {
        if self.refuse_open {
            return -1;
        }
        self.opened = true;
        0
    }

    fn close(&mut self, _port: i32) -> i32 {
        self.opened = false;
        0
    }

    fn send(&mut self, _port: i32, command: &[u8], response: &mut [u8]) -> i32 {
        if command == b"Capture" {
            self.captures += 1;
            return 1;
        }

        let Some(fiber) = std::str::from_utf8(command)
            .ok()
            .and_then(|c| c.strip_prefix("Getrgbi"))
            .and_then(|n| n.parse::<u8>().ok())
        else {
            return -1;
        };

        match self.readings.get(&fiber) {
            Some(rgb) => {
                let text = format!("{} {} {}", rgb.r, rgb.g, rgb.b);
                let bytes = text.as_bytes();
                let n = bytes.len().min(response.len().saturating_sub(1));
                response[..n].copy_from_slice(&bytes[..n]);
                response[n] = 0;
                1
            }
            None => -1,
        }
    }

    fn enum_ports(&mut self) -> i32 {
        1
    }

    fn set_response_timeout(&mut self, timeout_ms: u32) -> i32 {
        self.timeout_ms = Some(timeout_ms);
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_sets_response_timeout() {
        let sensor = ColorSensor::new(MockFeasa::new());
        assert_eq!(sensor.link.timeout_ms(), Some(8_000));
    }

    #[test]
    fn test_get_rgb_captures_then_reads() {
        let mut link = MockFeasa::new();
        link.set_reading(3, Rgb::new(250.0, 10.5, 5.0));
        let mut sensor = ColorSensor::new(link);

        let rgb = sensor.get_rgb(3).unwrap();

        assert_eq!(rgb, Rgb::new(250.0, 10.5, 5.0));
        assert_eq!(sensor.link.captures(), 1);
    }

    #[test]
    fn test_get_rgb_dark_fiber_is_none() {
        let mut sensor = ColorSensor::new(MockFeasa::new());
        assert_eq!(sensor.get_rgb(7), None);
    }

    #[test]
    fn test_get_rgbs_gives_up_on_first_failure() {
        let mut link = MockFeasa::new();
        link.set_reading(1, Rgb::new(1.0, 2.0, 3.0));
        // fiber 2 unscripted
        link.set_reading(3, Rgb::new(4.0, 5.0, 6.0));
        let mut sensor = ColorSensor::new(link);

        assert_eq!(sensor.get_rgbs(&[1, 2, 3]), None);
        assert_eq!(
            sensor.get_rgbs(&[1, 3]),
            Some(vec![Rgb::new(1.0, 2.0, 3.0), Rgb::new(4.0, 5.0, 6.0)])
        );
    }

    #[test]
    fn test_open_failure_is_connection_error() {
        let mut link = MockFeasa::new();
        link.refuse_open();
        let mut sensor = ColorSensor::new(link);

        assert!(matches!(sensor.open(), Err(Error::ConnectionFailed(_))));
    }

    #[test]
    fn test_parse_rgb_rejects_garbage() {
        assert_eq!(parse_rgb(b"not a reading\0"), None);
        assert_eq!(parse_rgb(b"1.0 2.0\0"), None);
        assert_eq!(parse_rgb(b"\0"), None);
    }

    #[test]
    fn test_parse_rgb_handles_unterminated_buffer() {
        assert_eq!(parse_rgb(b"9 8 7"), Some(Rgb::new(9.0, 8.0, 7.0)));
    }
}
