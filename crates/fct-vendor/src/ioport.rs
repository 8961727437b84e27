//! Discrete I/O card facade.

use fct_core::Status;
use std::collections::HashMap;

/// Entry points of the I/O-card library.
///
/// Points are addressed by module and channel. Statuses are whatever text
/// the library produces; only the fixed OK token means success and callers
/// must not parse the rest.
pub trait IoPortLink {
    /// Open the card.
    fn open(&mut self) -> Status;

    /// Close the card.
    fn close(&mut self) -> Status;

    /// Drive one digital output and latch it into the module.
    fn digital_output(&mut self, module: u8, channel: u16, level: bool) -> Status;

    /// Read one digital input. On a non-OK status the level is meaningless
    /// and reported as `false`.
    fn digital_input(&mut self, module: u8, channel: u16) -> (Status, bool);

    /// Read the three RGB sense lines of a color-detect channel.
    fn read_rgb_input(&mut self, module: u8, channel: u16) -> (Status, [bool; 3]);

    /// Flush buffered output writes on a module.
    fn update_module(&mut self, module: u8) -> Status;
}

/// In-memory I/O card for development and tests.
///
/// Outputs are remembered per point; inputs answer scripted levels and
/// default to low. `fail_next` makes exactly one following call answer a
/// fault status, the way the real library reports a dropped module.
#[derive(Debug, Default)]
pub struct MockIoCard {
    outputs: HashMap<(u8, u16), bool>,
    inputs: HashMap<(u8, u16), bool>,
    rgb_inputs: HashMap<(u8, u16), [bool; 3]>,
    fail_next: Option<String>,
    open: bool,
    updates: Vec<u8>,
}

impl MockIoCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the level a digital input answers.
    pub fn set_input(&mut self, module: u8, channel: u16, level: bool) {
        self.inputs.insert((module, channel), level);
    }

    /// Script the RGB sense lines of a channel.
    pub fn set_rgb_input(&mut self, module: u8, channel: u16, lines: [bool; 3]) {
        self.rgb_inputs.insert((module, channel), lines);
    }

    /// Make the next call answer this fault status.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    /// Last level driven on an output, if any.
    #[must_use]
    pub fn output_level(&mut self, module: u8, channel: u16) -> Option<bool> {
        self.outputs.get(&(module, channel)).copied()
    }

    /// Modules flushed so far, in order.
    #[must_use]
    pub fn updates(&self) -> &[u8] {
        &self.updates
    }

    fn take_fault(&mut self) -> Option<Status> {
        self.fail_next.take().map(Status::fault)
    }
}

impl IoPortLink for MockIoCard {
    fn open(&mut self) -> Status {
        if let Some(fault) = self.take_fault() {
            return fault;
        }
        self.open = true;
        Status::Ok
    }

    fn close(&mut self) -> Status {
        self.open = false;
        Status::Ok
    }

    fn digital_output(&mut self, module: u8, channel: u16, level: bool) -> Status {
        if let Some(fault) = self.take_fault() {
            return fault;
        }
        self.outputs.insert((module, channel), level);
        Status::Ok
    }

    fn digital_input(&mut self, module: u8, channel: u16) -> (Status, bool) {
        if let Some(fault) = self.take_fault() {
            return (fault, false);
        }
        let level = self.inputs.get(&(module, channel)).copied().unwrap_or(false);
        (Status::Ok, level)
    }

    fn read_rgb_input(&mut self, module: u8, channel: u16) -> (Status, [bool; 3]) {
        if let Some(fault) = self.take_fault() {
            return (fault, [false; 3]);
        }
        let lines = self
            .rgb_inputs
            .get(&(module, channel))
            .copied()
            .unwrap_or([false; 3]);
        (Status::Ok, lines)
    }

    fn update_module(&mut self, module: u8) -> Status {
        if let Some(fault) = self.take_fault() {
            return fault;
        }
        self.updates.push(module);
        Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_latched() {
        let mut card = MockIoCard::new();

        assert!(card.digital_output(2, 5, true).is_ok());
        assert_eq!(card.output_level(2, 5), Some(true));

        assert!(card.digital_output(2, 5, false).is_ok());
        assert_eq!(card.output_level(2, 5), Some(false));
    }

    #[test]
    fn test_unscripted_input_reads_low() {
        let mut card = MockIoCard::new();
        let (status, level) = card.digital_input(1, 1);
        assert!(status.is_ok());
        assert!(!level);
    }

    #[test]
    fn test_scripted_input() {
        let mut card = MockIoCard::new();
        card.set_input(1, 4, true);

        let (status, level) = card.digital_input(1, 4);
        assert!(status.is_ok());
        assert!(level);
    }

    #[test]
    fn test_fault_status_passes_through_once() {
        let mut card = MockIoCard::new();
        card.fail_next("module 3 not responding");

        let status = card.digital_output(3, 1, true);
        assert!(!status.is_ok());
        assert_eq!(status.to_string(), "module 3 not responding");

        // Faulted write was not latched; the next one is.
        assert_eq!(card.output_level(3, 1), None);
        assert!(card.digital_output(3, 1, true).is_ok());
    }

    #[test]
    fn test_rgb_sense_lines() {
        let mut card = MockIoCard::new();
        card.set_rgb_input(1, 2, [true, false, true]);

        let (status, lines) = card.read_rgb_input(1, 2);
        assert!(status.is_ok());
        assert_eq!(lines, [true, false, true]);
    }

    #[test]
    fn test_update_module_records_flush_order() {
        let mut card = MockIoCard::new();
        card.update_module(1);
        card.update_module(2);
        assert_eq!(card.updates(), &[1, 2]);
    }
}
