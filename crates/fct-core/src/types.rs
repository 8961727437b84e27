use serde::{Deserialize, Serialize};
use std::fmt;

/// One RGB reading from the color analyzer, in input order (R, G, B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channels in evaluation order, for per-channel limit checks.
    #[must_use]
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_keep_input_order() {
        let rgb = Rgb::new(250.0, 10.0, 5.0);
        assert_eq!(rgb.channels(), [250.0, 10.0, 5.0]);
    }

    #[test]
    fn test_display_is_space_separated() {
        let rgb = Rgb::new(1.5, 2.0, 3.25);
        assert_eq!(rgb.to_string(), "1.5 2 3.25");
    }
}
