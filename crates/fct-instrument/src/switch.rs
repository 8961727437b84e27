//! Switch/DAQ unit driver.

use fct_core::constants::{DEFAULT_OHM_RANGE, DEFAULT_OHM_RESOLUTION, DEFAULT_VOLT_RANGE};
use fct_core::Result;

use crate::transport::{ScpiTransport, parse_reply};

/// A multiplexer/switch unit addressed by relay channel number.
///
/// Relays are numbered by slot and position as the instrument labels them
/// (e.g. 101 for slot 1, relay 1). Relays are normally open: closing a
/// channel completes the circuit wired through it.
#[derive(Debug)]
pub struct SwitchUnit<T: ScpiTransport> {
    transport: T,
}

impl<T: ScpiTransport> SwitchUnit<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Open (de-energize) a relay channel.
    pub fn open_channel(&mut self, channel: u16) -> Result<()> {
        self.transport.write(&format!("ROUT:OPEN (@{channel})"))
    }

    /// Close (energize) a relay channel.
    pub fn close_channel(&mut self, channel: u16) -> Result<()> {
        self.transport.write(&format!("ROUT:CLOSE (@{channel})"))
    }

    /// Measure resistance through a channel with the fixture defaults
    /// (100 kΩ range, 0.03 resolution).
    pub fn measure_resistance(&mut self, channel: u16) -> Result<f64> {
        self.measure_resistance_with(channel, DEFAULT_OHM_RANGE, DEFAULT_OHM_RESOLUTION)
    }

    /// Measure resistance through a channel with an explicit range and
    /// resolution.
    pub fn measure_resistance_with(
        &mut self,
        channel: u16,
        ohm_range: u32,
        resolution: f64,
    ) -> Result<f64> {
        // The trailing space after the resolution comma matches what the
        // unit was commissioned with; some firmware revisions reject the
        // compact form.
        let command = format!("MEAS:RES? {ohm_range},{resolution}, (@{channel})");
        let reply = self.transport.query(&command)?;
        parse_reply(&command, &reply)
    }

    /// Measure DC voltage on a channel with the fixture default range (10 V).
    pub fn measure_voltage(&mut self, channel: u16) -> Result<f64> {
        self.measure_voltage_with(channel, DEFAULT_VOLT_RANGE)
    }

    /// Measure DC voltage on a channel with an explicit range.
    pub fn measure_voltage_with(&mut self, channel: u16, volt_range: u32) -> Result<f64> {
        let command = format!("MEAS:VOLT:DC? {volt_range},(@{channel})");
        let reply = self.transport.query(&command)?;
        parse_reply(&command, &reply)
    }
}
