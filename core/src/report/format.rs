use crate::prelude::TimeRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renders a float the way the historical velocity logs do: shortest
/// round-trip digits, a trailing `.0` on integral values, exponent form
/// (`1e+16`, `1.5e-05`) outside `[1e-4, 1e16)`, and `nan` / `inf`.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".into() } else { "-inf".into() };
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let plain = format!("{value}");
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// One answered velocity query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityReport {
    pub time_request: TimeRequest,
    pub velocity: f64,
}

impl VelocityReport {
    pub fn new(time_request: TimeRequest, velocity: f64) -> Self {
        Self {
            time_request,
            velocity,
        }
    }
}

/// The log block format is parsed downstream and must not change:
/// `"\nVelocity(time=<t>seconds) = <v> m/s\n"`.
impl fmt::Display for VelocityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\nVelocity(time={}seconds) = {} m/s\n",
            self.time_request,
            format_decimal(self.velocity)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals_match_log_rendering() {
        assert_eq!(format_decimal(1389.4745700513633), "1389.4745700513633");
        assert_eq!(format_decimal(5.0), "5.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(-0.0), "-0.0");
        assert_eq!(format_decimal(0.0001), "0.0001");
        assert_eq!(format_decimal(0.00001), "1e-05");
        assert_eq!(format_decimal(1.5e-7), "1.5e-07");
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(-2.5e20), "-2.5e+20");
        assert_eq!(format_decimal(1234567890123456.0), "1234567890123456.0");
        assert_eq!(format_decimal(f64::NAN), "nan");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn report_block_layout() {
        let report = VelocityReport::new(TimeRequest::Integer(1532334000), 1389.4745700513633);
        assert_eq!(
            report.to_string(),
            "\nVelocity(time=1532334000seconds) = 1389.4745700513633 m/s\n"
        );
    }

    #[test]
    fn float_request_keeps_fraction() {
        let report = VelocityReport::new(TimeRequest::Float(1532335268.5), 2.0);
        assert_eq!(
            report.to_string(),
            "\nVelocity(time=1532335268.5seconds) = 2.0 m/s\n"
        );
    }
}
