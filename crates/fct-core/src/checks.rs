//! Pass/fail threshold evaluation.
//!
//! Every measured value on the line funnels through [`check_scalar`]: a
//! value passes when it sits at or below the upper bound and at or above the
//! lower bound, with either bound optional. Multi-channel measurements (the
//! RGB analyzer) use [`check_vector`], which keeps per-channel verdicts
//! rather than collapsing them; the sequencer decides whether "all pass"
//! is required.
//!
//! The report line (`MAX:.. MIN:.. VAL:.. OK|NG`) is an observational
//! side-channel for the operator log. It never influences the verdict.

use crate::error::{Error, Result};
use tracing::debug;

/// Evaluate one value against optional bounds.
///
/// Returns `true` iff the upper bound is absent or `value <= max`, and the
/// lower bound is absent or `value >= min`. Both bounds absent is valid and
/// always passes.
///
/// # Examples
///
/// ```
/// use fct_core::check_scalar;
///
/// assert!(check_scalar(5.0, Some(10.0), Some(0.0)));
/// assert!(!check_scalar(11.0, Some(10.0), Some(0.0)));
/// assert!(check_scalar(5.0, None, None));
/// ```
#[must_use]
pub fn check_scalar(value: f64, max: Option<f64>, min: Option<f64>) -> bool {
    let below_max = max.is_none_or(|m| value <= m);
    let above_min = min.is_none_or(|m| value >= m);
    below_max && above_min
}

/// [`check_scalar`] plus a report line emitted on the tracing side-channel.
#[must_use]
pub fn check_scalar_logged(value: f64, max: Option<f64>, min: Option<f64>) -> bool {
    let pass = check_scalar(value, max, min);
    debug!(target: "fct::checks", "{}", report_line(value, max, min, pass));
    pass
}

/// Operator-readable report line for one scalar evaluation.
///
/// The `MAX:`/`MIN:` segments appear only when that bound was supplied:
/// `MAX:10\tMIN:0\tVAL:5\tOK`.
#[must_use]
pub fn report_line(value: f64, max: Option<f64>, min: Option<f64>, pass: bool) -> String {
    let mut line = String::new();
    if let Some(max) = max {
        line.push_str(&format!("MAX:{max}\t"));
    }
    if let Some(min) = min {
        line.push_str(&format!("MIN:{min}\t"));
    }
    line.push_str(&format!("VAL:{value}\t"));
    line.push_str(if pass { "OK" } else { "NG" });
    line
}

/// Evaluate a channel-ordered measurement against parallel bound slices.
///
/// Returns one verdict per index, in input order. All three slices must have
/// the same length; a mismatch is a caller contract violation and reported
/// as [`Error::LengthMismatch`], never guessed around.
pub fn check_vector(
    values: &[f64],
    maxes: &[Option<f64>],
    mins: &[Option<f64>],
) -> Result<Vec<bool>> {
    check_lengths(values.len(), maxes.len())?;
    check_lengths(values.len(), mins.len())?;

    Ok(values
        .iter()
        .zip(maxes.iter().zip(mins.iter()))
        .map(|(&value, (&max, &min))| check_scalar(value, max, min))
        .collect())
}

/// [`check_vector`] with a report line per channel.
pub fn check_vector_logged(
    values: &[f64],
    maxes: &[Option<f64>],
    mins: &[Option<f64>],
) -> Result<Vec<bool>> {
    check_lengths(values.len(), maxes.len())?;
    check_lengths(values.len(), mins.len())?;

    Ok(values
        .iter()
        .zip(maxes.iter().zip(mins.iter()))
        .map(|(&value, (&max, &min))| check_scalar_logged(value, max, min))
        .collect())
}

fn check_lengths(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(Error::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(5.0, Some(10.0), Some(0.0), true)]
    #[case(11.0, Some(10.0), Some(0.0), false)]
    #[case(-1.0, Some(10.0), Some(0.0), false)]
    #[case(10.0, Some(10.0), Some(0.0), true)]
    #[case(0.0, Some(10.0), Some(0.0), true)]
    #[case(5.0, None, None, true)]
    #[case(5.0, Some(4.0), None, false)]
    #[case(5.0, None, Some(6.0), false)]
    fn test_check_scalar(
        #[case] value: f64,
        #[case] max: Option<f64>,
        #[case] min: Option<f64>,
        #[case] expected: bool,
    ) {
        assert_eq!(check_scalar(value, max, min), expected);
    }

    #[test]
    fn test_check_vector_per_channel_verdicts() {
        let verdicts = check_vector(
            &[250.0, 10.0, 5.0],
            &[Some(255.0), Some(255.0), Some(255.0)],
            &[Some(0.0), Some(0.0), Some(0.0)],
        )
        .unwrap();
        assert_eq!(verdicts, vec![true, true, true]);
    }

    #[test]
    fn test_check_vector_does_not_collapse() {
        let verdicts = check_vector(
            &[300.0, 10.0],
            &[Some(255.0), Some(255.0)],
            &[Some(0.0), Some(0.0)],
        )
        .unwrap();
        assert_eq!(verdicts, vec![false, true]);
    }

    #[test]
    fn test_check_vector_length_mismatch() {
        let result = check_vector(&[1.0, 2.0, 3.0], &[Some(5.0), Some(5.0)], &[None, None, None]);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_report_line_with_both_bounds() {
        let line = report_line(5.0, Some(10.0), Some(0.0), true);
        assert_eq!(line, "MAX:10\tMIN:0\tVAL:5\tOK");
    }

    #[test]
    fn test_report_line_omits_absent_bounds() {
        assert_eq!(report_line(5.0, None, Some(6.0), false), "MIN:6\tVAL:5\tNG");
        assert_eq!(report_line(5.0, Some(4.0), None, false), "MAX:4\tVAL:5\tNG");
        assert_eq!(report_line(5.0, None, None, true), "VAL:5\tOK");
    }

    #[test]
    fn test_logged_variant_matches_pure_verdict() {
        assert_eq!(
            check_scalar_logged(7.5, Some(10.0), None),
            check_scalar(7.5, Some(10.0), None)
        );
    }
}
