//! Backend handles behind the device wrappers.

use fct_core::Result;
use fct_instrument::{ScpiTransport, SwitchUnit};
use fct_vendor::IoPortLink;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::warn;

/// Switch-unit capability the device layer needs: relay actuation plus the
/// resistance read the cover sense uses.
///
/// Actuation is fire-and-forget: the unit gives no status for `ROUT`
/// writes and the device contract fixes the result to the OK token, so a
/// failed write is logged and swallowed here. `resistance` keeps its
/// `Result` because the cover logic folds failures into a sentinel itself.
pub trait SwitchBackend {
    /// Close the relay, completing the circuit wired through it.
    fn energize(&mut self, channel: u16);

    /// Open the relay.
    fn release(&mut self, channel: u16);

    /// Measure resistance through the channel.
    fn resistance(&mut self, channel: u16) -> Result<f64>;
}

impl<T: ScpiTransport> SwitchBackend for SwitchUnit<T> {
    fn energize(&mut self, channel: u16) {
        if let Err(e) = self.close_channel(channel) {
            warn!(target: "fct::dio", channel, error = %e, "switch energize write failed");
        }
    }

    fn release(&mut self, channel: u16) {
        if let Err(e) = self.open_channel(channel) {
            warn!(target: "fct::dio", channel, error = %e, "switch release write failed");
        }
    }

    fn resistance(&mut self, channel: u16) -> Result<f64> {
        self.measure_resistance(channel)
    }
}

/// Shared handle to the session's switch unit.
pub type SharedSwitch = Rc<RefCell<dyn SwitchBackend>>;

/// Shared handle to the session's I/O card.
pub type SharedIoCard = Rc<RefCell<dyn IoPortLink>>;

/// The backend a device was bound to at construction.
///
/// The binding never changes for the life of the device; invalid
/// combinations (digital input on a switch relay) are handled explicitly in
/// the device layer rather than flag-checked per call.
#[derive(Clone)]
pub enum DioBackend {
    /// Relay channel on the switch/DAQ unit; the module number is unused.
    Switch(SharedSwitch),

    /// Module + channel point on the discrete I/O card.
    IoCard(SharedIoCard),
}

impl DioBackend {
    /// Short tag for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Switch(_) => "switch",
            Self::IoCard(_) => "iocard",
        }
    }
}

impl fmt::Debug for DioBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fct_instrument::MockTransport;

    #[test]
    fn test_switch_adapter_maps_on_to_close() {
        let (transport, handle) = MockTransport::new();
        let mut unit = SwitchUnit::new(transport);

        unit.energize(104);
        unit.release(104);

        assert_eq!(handle.sent(), vec!["ROUT:CLOSE (@104)", "ROUT:OPEN (@104)"]);
    }

    #[test]
    fn test_switch_adapter_swallows_write_faults() {
        let (transport, handle) = MockTransport::new();
        let mut unit = SwitchUnit::new(transport);

        handle.fail_next("session dropped");
        unit.energize(104);

        // The fault was consumed and nothing reached the wire.
        assert!(handle.sent().is_empty());
    }

    #[test]
    fn test_switch_adapter_resistance_passes_through() {
        let (transport, handle) = MockTransport::new();
        handle.push_reply("42.5");
        let mut unit = SwitchUnit::new(transport);

        assert_eq!(unit.resistance(301).unwrap(), 42.5);

        handle.fail_next("session dropped");
        assert!(unit.resistance(301).is_err());
    }
}
