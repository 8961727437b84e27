//! Programmable power source driver.

use fct_core::{Error, Result};
use std::fmt;

use crate::transport::{ScpiTransport, parse_reply};

/// One output channel of the power source, rendered as `CHn` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceChannel(u8);

impl SourceChannel {
    /// Channel 1, the default on single-output fixtures.
    pub const CH1: SourceChannel = SourceChannel(1);

    /// Create a channel with validation.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for channel 0; the source numbers its
    /// outputs from 1.
    pub fn new(n: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::config("power source channels are numbered from 1"));
        }
        Ok(Self(n))
    }
}

impl Default for SourceChannel {
    fn default() -> Self {
        Self::CH1
    }
}

impl fmt::Display for SourceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", self.0)
    }
}

/// A programmable power source with one or more output channels.
#[derive(Debug)]
pub struct PowerSource<T: ScpiTransport> {
    transport: T,
}

impl<T: ScpiTransport> PowerSource<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Program the voltage setpoint on a channel.
    pub fn set_voltage(&mut self, channel: SourceChannel, volts: f64) -> Result<()> {
        self.transport.write(&format!(":{channel}:VOLTage {volts}"))
    }

    /// Program the current limit on a channel.
    pub fn set_current(&mut self, channel: SourceChannel, amps: f64) -> Result<()> {
        self.transport.write(&format!(":{channel}:CURRent {amps}"))
    }

    /// Enable a channel's output.
    pub fn output_on(&mut self, channel: SourceChannel) -> Result<()> {
        self.transport.write(&format!("OUTPut {channel},ON"))
    }

    /// Disable a channel's output.
    pub fn output_off(&mut self, channel: SourceChannel) -> Result<()> {
        self.transport.write(&format!("OUTPut {channel},OFF"))
    }

    /// Read back the measured output voltage on a channel.
    pub fn measure_voltage(&mut self, channel: SourceChannel) -> Result<f64> {
        let command = format!("MEAS:VOLT? {channel}");
        let reply = self.transport.query(&command)?;
        parse_reply(&command, &reply)
    }

    /// Read back the measured output current on a channel.
    pub fn measure_current(&mut self, channel: SourceChannel) -> Result<f64> {
        let command = format!("MEAS:CURR? {channel}");
        let reply = self.transport.query(&command)?;
        parse_reply(&command, &reply)
    }
}
