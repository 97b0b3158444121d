use derive_more::Display;

use crate::regressor::FitResult;

const STRONG_FIT_THRESHOLD: f64 = 0.9;
const MODERATE_FIT_THRESHOLD: f64 = 0.7;

#[derive(Debug, Display, PartialEq, Clone, Copy)]
pub enum Trend {
    #[display("creciente")]
    Increasing,
    #[display("decreciente")]
    Decreasing,
}

#[derive(Debug, Display, PartialEq, Clone, Copy)]
pub enum FitQuality {
    #[display("muy fuerte")]
    Strong,
    #[display("moderada")]
    Moderate,
    #[display("débil")]
    Weak,
}

/// Human readable summary of a fit, shown next to the chart.
#[derive(Debug, Display, PartialEq, Clone, Copy)]
#[display("La relación es {} y la calidad del ajuste es {} (R²={:.4}).", trend, quality, r_squared)]
pub struct Interpretation {
    pub trend: Trend,
    pub quality: FitQuality,
    pub r_squared: f64,
}

impl Interpretation {
    pub fn of(result: &FitResult) -> Self {
        // A flat line reads as decreasing
        let trend = if result.slope > 0.0 { Trend::Increasing } else { Trend::Decreasing };

        let quality = if result.r_squared >= STRONG_FIT_THRESHOLD {
            FitQuality::Strong
        } else if result.r_squared >= MODERATE_FIT_THRESHOLD {
            FitQuality::Moderate
        } else {
            FitQuality::Weak
        };

        Self { trend, quality, r_squared: result.r_squared }
    }
}
