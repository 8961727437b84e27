//! VISA-style transport seam.

use fct_core::{Error, Result};

/// A message-based connection to one SCPI instrument.
///
/// Implementations own the physical resource (VISA session, TCP socket,
/// serial line) for the lifetime of the instrument wrapper. Commands are
/// single lines without terminators; the transport appends whatever framing
/// the resource requires.
pub trait ScpiTransport {
    /// Send a command that produces no reply.
    fn write(&mut self, command: &str) -> Result<()>;

    /// Send a query and return the instrument's reply verbatim.
    fn query(&mut self, command: &str) -> Result<String>;
}

/// Parse a numeric instrument reply, keeping the offending command and the
/// raw text in the error.
pub(crate) fn parse_reply(command: &str, reply: &str) -> Result<f64> {
    reply.trim().parse::<f64>().map_err(|_| Error::InvalidResponse {
        command: command.to_string(),
        response: reply.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply_trims_framing() {
        assert_eq!(parse_reply("MEAS:VOLT? CH1", " +1.3498E+01\r\n").unwrap(), 13.498);
    }

    #[test]
    fn test_parse_reply_keeps_context() {
        let error = parse_reply("MEAS:RES? 100000,0.03, (@101)", "OVLD").unwrap_err();
        match error {
            Error::InvalidResponse { command, response } => {
                assert_eq!(command, "MEAS:RES? 100000,0.03, (@101)");
                assert_eq!(response, "OVLD");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
