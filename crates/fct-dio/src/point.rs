//! Fixture device wrappers over the digital backends.

use fct_core::Status;
use std::fmt;

use crate::backend::DioBackend;

/// What an output point does on the fixture.
///
/// The role is identity only; every role actuates through the same two
/// primitives. It exists so logs and fixture maps can say "ANDON 2" instead
/// of "output module 1 channel 7", and so the piston variants stay distinct
/// entries in the fixture map even though they behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRole {
    /// Blocks the carrier in the fixture.
    Block,
    /// Line-status indicator light.
    Andon,
    /// General-purpose relay.
    Relay,
    /// Press-down piston.
    PistonPisador,
    /// Test-pin piston.
    PistonPines,
    /// Programming-pin piston.
    PistonPinesProg,
}

impl fmt::Display for OutputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Block => "block",
            Self::Andon => "andon",
            Self::Relay => "relay",
            Self::PistonPisador => "piston-pisador",
            Self::PistonPines => "piston-pines",
            Self::PistonPinesProg => "piston-pines-prog",
        };
        f.write_str(name)
    }
}

/// What an input point detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// Carrier/board present in the fixture nest.
    BoardDetect,
    /// Bare PCB present under the probes.
    PcbDetect,
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardDetect => f.write_str("board-detect"),
            Self::PcbDetect => f.write_str("pcb-detect"),
        }
    }
}

/// One digital output on the fixture.
///
/// Identity (role, module, channel) and backend binding are fixed at
/// construction. `set_on`/`set_off` are the primitives; the role-named
/// aliases exist so sequence code reads like the fixture map.
#[derive(Debug)]
pub struct DigitalOutput {
    role: OutputRole,
    module: u8,
    channel: u16,
    backend: DioBackend,
}

impl DigitalOutput {
    /// Bind an output point. For switch-bound points the module number is
    /// carried but ignored; the channel is the relay number.
    pub fn new(role: OutputRole, module: u8, channel: u16, backend: DioBackend) -> Self {
        Self {
            role,
            module,
            channel,
            backend,
        }
    }

    #[must_use]
    pub fn role(&self) -> OutputRole {
        self.role
    }

    #[must_use]
    pub fn module(&self) -> u8 {
        self.module
    }

    #[must_use]
    pub fn channel(&self) -> u16 {
        self.channel
    }

    /// Drive the point on.
    ///
    /// Switch binding: closes the relay and answers the fixed OK token.
    /// I/O-card binding: drives the output and answers the card's status
    /// unmodified.
    pub fn set_on(&self) -> Status {
        match &self.backend {
            DioBackend::Switch(switch) => {
                switch.borrow_mut().energize(self.channel);
                Status::Ok
            }
            DioBackend::IoCard(card) => {
                card.borrow_mut()
                    .digital_output(self.module, self.channel, true)
            }
        }
    }

    /// Drive the point off.
    pub fn set_off(&self) -> Status {
        match &self.backend {
            DioBackend::Switch(switch) => {
                switch.borrow_mut().release(self.channel);
                Status::Ok
            }
            DioBackend::IoCard(card) => {
                card.borrow_mut()
                    .digital_output(self.module, self.channel, false)
            }
        }
    }

    /// Block the carrier (blocker roles).
    pub fn block(&self) -> Status {
        self.set_on()
    }

    /// Release the carrier.
    pub fn unblock(&self) -> Status {
        self.set_off()
    }

    /// Light the indicator (ANDON roles).
    pub fn turn_on(&self) -> Status {
        self.set_on()
    }

    /// Extinguish the indicator.
    pub fn turn_off(&self) -> Status {
        self.set_off()
    }

    /// Energize the relay/piston.
    pub fn energize(&self) -> Status {
        self.set_on()
    }

    /// De-energize the relay/piston.
    pub fn deenergize(&self) -> Status {
        self.set_off()
    }
}

/// One digital input on the fixture.
#[derive(Debug)]
pub struct DigitalInput {
    role: InputRole,
    module: u8,
    channel: u16,
    backend: DioBackend,
}

impl DigitalInput {
    /// Bind an input point. Only the I/O-card backend can actually read;
    /// a switch binding is kept but answers the unsupported sentinel.
    pub fn new(role: InputRole, module: u8, channel: u16, backend: DioBackend) -> Self {
        Self {
            role,
            module,
            channel,
            backend,
        }
    }

    #[must_use]
    pub fn role(&self) -> InputRole {
        self.role
    }

    #[must_use]
    pub fn module(&self) -> u8 {
        self.module
    }

    #[must_use]
    pub fn channel(&self) -> u16 {
        self.channel
    }

    /// Read the raw input level.
    ///
    /// A switch-bound input answers `(UnsupportedDevice, false)` without
    /// calling into the switch handler; the switch unit has no digital
    /// input capability.
    pub fn state(&self) -> (Status, bool) {
        match &self.backend {
            DioBackend::Switch(_) => (Status::UnsupportedDevice, false),
            DioBackend::IoCard(card) => card.borrow_mut().digital_input(self.module, self.channel),
        }
    }

    /// Detector convenience: the raw level, with non-OK statuses reading as
    /// "not detected".
    #[must_use]
    pub fn is_detected(&self) -> bool {
        let (status, level) = self.state();
        status.is_ok() && level
    }
}
