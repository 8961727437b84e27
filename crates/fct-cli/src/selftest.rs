//! End-to-end dry run of the station against the mock instruments.
//!
//! The sequence mirrors what a real board test does: check the cover and
//! board presence, block the carrier, measure every step in the limits
//! table through the switch unit, read one fiber on the color analyzer,
//! and log the verdicts. Every instrument is replaced by its mock and the
//! replies are scripted from the limits table's `sim` values.

use anyhow::Context;
use fct_core::{Rgb, Status, check_scalar_logged, check_vector_logged, report_line};
use fct_dio::{Cover, DigitalInput, DigitalOutput, DioBackend, InputRole, OutputRole};
use fct_instrument::{MockTransport, SwitchUnit};
use fct_log::DailyCsv;
use fct_vendor::{ColorSensor, MockFeasa, MockIoCard};
use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;
use tracing::{info, warn};

use crate::config::LimitsFile;

const COVER_CHANNEL: u16 = 401;
const SELFTEST_FIBER: u8 = 1;
const RGB_MAX: Option<f64> = Some(255.0);
const RGB_MIN: Option<f64> = Some(0.0);

/// Outcome of one dry run.
#[derive(Debug)]
pub struct Report {
    cover_closed: bool,
    board_detected: bool,
    steps: Vec<StepResult>,
    rgb_passed: bool,
    log_path: std::path::PathBuf,
}

#[derive(Debug)]
struct StepResult {
    name: String,
    line: String,
    pass: bool,
}

impl Report {
    /// Whether every stage of the dry run passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.cover_closed
            && self.board_detected
            && self.rgb_passed
            && self.steps.iter().all(|s| s.pass)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cover: {}", verdict(self.cover_closed))?;
        writeln!(f, "board: {}", verdict(self.board_detected))?;
        for step in &self.steps {
            writeln!(f, "{}: {}", step.name, step.line)?;
        }
        writeln!(f, "rgb: {}", verdict(self.rgb_passed))?;
        write!(f, "log: {}", self.log_path.display())
    }
}

fn verdict(pass: bool) -> &'static str {
    if pass { "OK" } else { "NG" }
}

/// Run the dry-run sequence and append one log row per step.
pub fn run(limits: &LimitsFile, log_dir: &Path) -> anyhow::Result<Report> {
    // Script the switch unit: the cover loop reads 100 ohms (closed),
    // then each step's voltage query answers its simulated value.
    let (transport, handle) = MockTransport::new();
    handle.push_reply("+1.0000000E+02");
    for step in &limits.steps {
        handle.push_reply(step.sim.to_string());
    }

    let switch = Rc::new(RefCell::new(SwitchUnit::new(transport)));
    let card = Rc::new(RefCell::new(MockIoCard::new()));
    card.borrow_mut().set_input(1, 1, true);

    let cover = Cover::new(COVER_CHANNEL, switch.clone());
    let board = DigitalInput::new(InputRole::BoardDetect, 1, 1, DioBackend::IoCard(card.clone()));
    let blocker = DigitalOutput::new(OutputRole::Block, 0, 207, DioBackend::Switch(switch.clone()));
    let andon = DigitalOutput::new(OutputRole::Andon, 2, 1, DioBackend::IoCard(card.clone()));

    let cover_closed = cover.is_closed();
    let board_detected = board.is_detected();

    if blocker.block() != Status::Ok {
        anyhow::bail!("carrier blocker refused to actuate");
    }

    let log = DailyCsv::open(log_dir, &limits.base_name, &["step", "value", "verdict"])
        .context("opening the daily log")?;

    let mut steps = Vec::with_capacity(limits.steps.len());
    for step in &limits.steps {
        let value = switch
            .borrow_mut()
            .measure_voltage(step.channel)
            .with_context(|| format!("measuring step '{}'", step.name))?;
        let pass = check_scalar_logged(value, step.max, step.min);
        log.append(&[
            step.name.clone(),
            value.to_string(),
            verdict(pass).to_string(),
        ])
        .context("appending to the daily log")?;
        steps.push(StepResult {
            name: step.name.clone(),
            line: report_line(value, step.max, step.min, pass),
            pass,
        });
    }

    let rgb_passed = check_fiber()?;

    wind_down(
        &blocker,
        &andon,
        steps.iter().all(|s| s.pass) && rgb_passed,
    );

    info!(target: "fct::selftest", steps = steps.len(), "dry run complete");

    Ok(Report {
        cover_closed,
        board_detected,
        steps,
        rgb_passed,
        log_path: log.path().to_path_buf(),
    })
}

/// Release the carrier and set the fail lamp. A non-OK status here is a
/// fixture problem, not a verdict: it is reported and the run's result
/// stands.
fn wind_down(blocker: &DigitalOutput, andon: &DigitalOutput, passed: bool) {
    let released = blocker.unblock();
    if !released.is_ok() {
        warn!(target: "fct::selftest", status = %released, "carrier blocker did not release");
    }

    let lamp = if passed {
        andon.turn_off()
    } else {
        andon.turn_on()
    };
    if !lamp.is_ok() {
        warn!(target: "fct::selftest", status = %lamp, "fail lamp actuation failed");
    }
}

/// Capture one fiber on the mock analyzer and evaluate its channels.
fn check_fiber() -> anyhow::Result<bool> {
    let mut link = MockFeasa::new();
    link.set_reading(SELFTEST_FIBER, Rgb::new(200.0, 14.0, 3.0));

    let mut sensor = ColorSensor::new(link);
    sensor
        .open()
        .context("opening the color analyzer session")?;

    let Some(reading) = sensor.get_rgb(SELFTEST_FIBER) else {
        sensor.close().context("closing the color analyzer")?;
        return Ok(false);
    };
    sensor.close().context("closing the color analyzer")?;

    let verdicts = check_vector_logged(
        &reading.channels(),
        &[RGB_MAX; 3],
        &[RGB_MIN; 3],
    )?;
    Ok(verdicts.iter().all(|&v| v))
}
