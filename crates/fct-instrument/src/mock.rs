//! Scriptable transport for testing without instruments.
//!
//! [`MockTransport`] plugs into any wrapper in this crate in place of a real
//! VISA session. Its paired [`MockTransportHandle`] scripts query replies,
//! injects faults, and inspects the commands the wrapper sent, sharing state
//! through an `Rc<RefCell<..>>` since the harness is single-threaded.

use fct_core::{Error, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::transport::ScpiTransport;

#[derive(Debug, Default)]
struct MockState {
    /// Every command sent, writes and queries alike, in order.
    sent: Vec<String>,
    /// Scripted replies consumed by queries, FIFO.
    replies: VecDeque<String>,
    /// When set, the next operation fails with this message.
    fail_next: Option<String>,
}

/// Mock SCPI transport for tests and the self-test sequence.
///
/// # Examples
///
/// ```
/// use fct_instrument::{MockTransport, ScpiTransport};
///
/// let (mut transport, handle) = MockTransport::new();
/// handle.push_reply("+1.0015E+02");
///
/// transport.write("ROUT:CLOSE (@101)").unwrap();
/// let reply = transport.query("MEAS:RES? 100000,0.03, (@101)").unwrap();
///
/// assert_eq!(reply, "+1.0015E+02");
/// assert_eq!(handle.sent()[0], "ROUT:CLOSE (@101)");
/// ```
#[derive(Debug)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

/// Scripting and inspection handle for a [`MockTransport`].
#[derive(Debug, Clone)]
pub struct MockTransportHandle {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Create a transport and its scripting handle.
    pub fn new() -> (Self, MockTransportHandle) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            MockTransportHandle { state },
        )
    }

    fn take_fault(&self) -> Option<String> {
        self.state.borrow_mut().fail_next.take()
    }
}

impl ScpiTransport for MockTransport {
    fn write(&mut self, command: &str) -> Result<()> {
        if let Some(message) = self.take_fault() {
            return Err(Error::transport(message));
        }
        self.state.borrow_mut().sent.push(command.to_string());
        Ok(())
    }

    fn query(&mut self, command: &str) -> Result<String> {
        if let Some(message) = self.take_fault() {
            return Err(Error::transport(message));
        }
        let mut state = self.state.borrow_mut();
        state.sent.push(command.to_string());
        state
            .replies
            .pop_front()
            .ok_or_else(|| Error::transport(format!("no scripted reply for '{command}'")))
    }
}

impl MockTransportHandle {
    /// Queue a reply for the next unanswered query.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.state.borrow_mut().replies.push_back(reply.into());
    }

    /// Make the next write or query fail with a transport error.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.state.borrow_mut().fail_next = Some(message.into());
    }

    /// Every command sent so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.state.borrow().sent.clone()
    }

    /// Drop the record of sent commands.
    pub fn clear_sent(&self) {
        self.state.borrow_mut().sent.clear();
    }
}
