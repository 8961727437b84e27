//! Fixture cover sense.

use fct_core::constants::{COVER_CLOSED_MAX_OHMS, OPEN_CIRCUIT_OHMS};
use tracing::warn;

use crate::backend::SharedSwitch;

/// Safety cover detector, read as a resistance loop through the switch
/// unit.
///
/// The loop closes with the cover: below 500 Ω means closed. A failed read
/// is substituted with the 999 999 Ω open-circuit sentinel, so transport
/// faults read as "cover open". That conflation is long-standing fixture
/// behavior and kept as-is. It can mask a broken measurement path as a
/// permanently open cover.
pub struct Cover {
    channel: u16,
    switch: SharedSwitch,
}

impl std::fmt::Debug for Cover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cover").field("channel", &self.channel).finish_non_exhaustive()
    }
}

impl Cover {
    pub fn new(channel: u16, switch: SharedSwitch) -> Self {
        Self { channel, switch }
    }

    /// Whether the cover loop reads closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let resistance = match self.switch.borrow_mut().resistance(self.channel) {
            Ok(ohms) => ohms,
            Err(e) => {
                warn!(
                    target: "fct::dio",
                    channel = self.channel,
                    error = %e,
                    "cover resistance read failed, assuming open circuit"
                );
                OPEN_CIRCUIT_OHMS
            }
        };
        resistance < COVER_CLOSED_MAX_OHMS
    }
}
