//! End-to-end wiring of a fixture session against mock hardware.
//!
//! Builds the device layer the way a session setup does (one shared switch
//! unit, one shared I/O card, devices bound once) and checks the observable
//! contract of every device kind.

use fct_core::Status;
use fct_dio::{Cover, DigitalInput, DigitalOutput, DioBackend, InputRole, OutputRole};
use fct_instrument::{MockTransport, MockTransportHandle, SwitchUnit};
use fct_vendor::MockIoCard;
use std::cell::RefCell;
use std::rc::Rc;

struct Fixture {
    switch: Rc<RefCell<SwitchUnit<MockTransport>>>,
    scpi: MockTransportHandle,
    card: Rc<RefCell<MockIoCard>>,
}

impl Fixture {
    fn new() -> Self {
        let (transport, scpi) = MockTransport::new();
        Self {
            switch: Rc::new(RefCell::new(SwitchUnit::new(transport))),
            scpi,
            card: Rc::new(RefCell::new(MockIoCard::new())),
        }
    }

    fn switch_backend(&self) -> DioBackend {
        DioBackend::Switch(self.switch.clone())
    }

    fn card_backend(&self) -> DioBackend {
        DioBackend::IoCard(self.card.clone())
    }
}

#[test]
fn switch_bound_output_drives_exactly_the_relay_commands() {
    let fixture = Fixture::new();
    let blocker = DigitalOutput::new(OutputRole::Block, 0, 101, fixture.switch_backend());

    assert_eq!(blocker.set_on(), Status::Ok);
    assert_eq!(blocker.set_off(), Status::Ok);

    assert_eq!(
        fixture.scpi.sent(),
        vec!["ROUT:CLOSE (@101)", "ROUT:OPEN (@101)"]
    );
}

#[test]
fn iocard_output_returns_card_status_unmodified() {
    let fixture = Fixture::new();
    let andon = DigitalOutput::new(OutputRole::Andon, 2, 7, fixture.card_backend());

    assert_eq!(andon.turn_on(), Status::Ok);
    assert_eq!(fixture.card.borrow_mut().output_level(2, 7), Some(true));

    fixture.card.borrow_mut().fail_next("module 2 update failed");
    assert_eq!(andon.turn_off(), Status::fault("module 2 update failed"));
}

#[test]
fn switch_bound_input_reports_unsupported_without_touching_the_unit() {
    let fixture = Fixture::new();
    let detect = DigitalInput::new(InputRole::BoardDetect, 0, 5, fixture.switch_backend());

    let (status, level) = detect.state();

    assert_eq!(status, Status::UnsupportedDevice);
    assert!(!level);
    assert!(fixture.scpi.sent().is_empty());
}

#[test]
fn iocard_input_follows_scripted_board_presence() {
    let fixture = Fixture::new();
    let detect = DigitalInput::new(InputRole::PcbDetect, 1, 2, fixture.card_backend());

    assert!(!detect.is_detected());

    fixture.card.borrow_mut().set_input(1, 2, true);
    assert!(detect.is_detected());
}

#[test]
fn cover_reads_closed_at_100_ohms_and_open_on_read_failure() {
    let fixture = Fixture::new();
    let cover = Cover::new(401, fixture.switch.clone());

    fixture.scpi.push_reply("+1.0000000E+02");
    assert!(cover.is_closed());

    // No scripted reply: the resistance query fails and the sentinel kicks in.
    assert!(!cover.is_closed());
}

#[test]
fn devices_share_one_switch_session() {
    let fixture = Fixture::new();
    let blocker = DigitalOutput::new(OutputRole::Block, 0, 101, fixture.switch_backend());
    let relay = DigitalOutput::new(OutputRole::Relay, 0, 102, fixture.switch_backend());
    let andon = DigitalOutput::new(OutputRole::Andon, 0, 103, fixture.switch_backend());

    blocker.block();
    relay.energize();
    andon.turn_on();
    relay.deenergize();

    assert_eq!(
        fixture.scpi.sent(),
        vec![
            "ROUT:CLOSE (@101)",
            "ROUT:CLOSE (@102)",
            "ROUT:CLOSE (@103)",
            "ROUT:OPEN (@102)",
        ]
    );
}
