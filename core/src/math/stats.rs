use serde::{Deserialize, Serialize};

/// Descriptive statistics over the finite values of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub finite: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

pub struct StatsHelper;

impl StatsHelper {
    /// Summarizes `values`, skipping NaN and infinities. With no finite
    /// values, `mean`, `min` and `max` are NaN.
    pub fn summarize(values: &[f64]) -> SeriesSummary {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return SeriesSummary {
                count: values.len(),
                finite: 0,
                mean: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let sum: f64 = finite.iter().sum();
        SeriesSummary {
            count: values.len(),
            finite: finite.len(),
            mean: sum / finite.len() as f64,
            min: finite.iter().copied().fold(f64::INFINITY, f64::min),
            max: finite.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}
