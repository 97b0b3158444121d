use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::estimator::{DataPoint, Estimator, Point};

/// Ordinary least squares fit of `y = slope * x + intercept`, computed with the closed form
/// over the raw sums of the data.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct LinearRegressionEstimator {
    slope: f64,
    intercept: f64,
}

impl LinearRegressionEstimator {
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of this line against `data`.
    pub fn r_squared(&self, data: &[Point]) -> Result<f64, RegressionError> {
        if data.len() < 2 {
            return Err(RegressionError::InsufficientData);
        }

        // Rounded sums of a flat dataset need not cancel to exactly zero
        if data.iter().all(|p| p.y == data[0].y) {
            return Err(RegressionError::DegenerateInput(Degeneracy::ConstantY));
        }

        let n = data.len() as f64;
        let y_mean = data.iter().map(|p| p.y).sum::<f64>() / n;
        let ss_tot: f64 = data.iter().map(|p| (p.y - y_mean).powi(2)).sum();
        let ss_res: f64 = data.iter().map(|p| (p.y - self.estimate(p.x)).powi(2)).sum();

        if ss_tot == 0.0 {
            return Err(RegressionError::DegenerateInput(Degeneracy::ConstantY));
        }

        let r_squared = 1.0 - ss_res / ss_tot;
        if !r_squared.is_finite() {
            return Err(RegressionError::DegenerateInput(Degeneracy::NonFinite));
        }
        Ok(r_squared)
    }
}

impl<'de> Estimator<'de, f64, f64> for LinearRegressionEstimator {
    type Error = RegressionError;

    fn build(data: &[DataPoint<f64, f64>]) -> Result<Self, RegressionError> {
        if data.len() < 2 {
            return Err(RegressionError::InsufficientData);
        }

        if data.iter().all(|p| p.x == data[0].x) {
            return Err(RegressionError::DegenerateInput(Degeneracy::ConstantX));
        }

        let n = data.len() as f64;
        let (sum_x, sum_y, sum_xy, sum_x2) = data.iter().fold(
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64),
            |(sx, sy, sxy, sxx), &DataPoint { x, y }| (sx + x, sy + y, sxy + x * y, sxx + x * x),
        );

        let denominator = n * sum_x2 - sum_x.powi(2);
        if denominator == 0.0 {
            return Err(RegressionError::DegenerateInput(Degeneracy::ConstantX));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(RegressionError::DegenerateInput(Degeneracy::NonFinite));
        }

        Ok(Self { slope, intercept })
    }

    fn estimate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Display, PartialEq, Clone, Copy)]
pub enum Degeneracy {
    #[display("all x values are identical, the slope is undefined")]
    ConstantX,

    #[display("all y values are identical, R² is undefined")]
    ConstantY,

    #[display("the fit produced a non-finite value")]
    NonFinite,
}

#[derive(Debug, Error, PartialEq, Clone)]
pub enum RegressionError {
    #[error("at least 2 data points are required")]
    InsufficientData,

    #[error("degenerate input: {0}")]
    DegenerateInput(Degeneracy),
}

#[cfg(test)]
mod tests {
    use crate::estimator::{Degeneracy, Estimator, LinearRegressionEstimator, Point, RegressionError};

    #[test]
    fn test_should_recover_line_from_collinear_points() {
        let data = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];

        let estimator = LinearRegressionEstimator::build(&data).unwrap();
        assert_eq!(estimator.estimate(3.0), 3.0);
        assert_eq!(estimator.estimate(4.0), 4.0);
        assert_eq!(estimator.estimate(5.0), 5.0);
    }

    #[test]
    fn test_should_reject_empty_and_single_point_data() {
        assert_eq!(LinearRegressionEstimator::build(&[]), Err(RegressionError::InsufficientData));
        assert_eq!(
            LinearRegressionEstimator::build(&[Point::new(1.0, 2.0)]),
            Err(RegressionError::InsufficientData)
        );
    }

    #[test]
    fn test_should_reject_vertical_data() {
        let data = vec![Point::new(3.0, 1.0), Point::new(3.0, 2.0), Point::new(3.0, 5.0)];

        assert_eq!(
            LinearRegressionEstimator::build(&data),
            Err(RegressionError::DegenerateInput(Degeneracy::ConstantX))
        );
    }

    #[test]
    fn test_r_squared_is_undefined_for_constant_y() {
        let data = vec![Point::new(1.0, 4.0), Point::new(2.0, 4.0), Point::new(3.0, 4.0)];

        let estimator = LinearRegressionEstimator::build(&data).unwrap();
        assert_eq!(estimator.slope(), 0.0);
        assert_eq!(estimator.intercept(), 4.0);
        assert_eq!(
            estimator.r_squared(&data),
            Err(RegressionError::DegenerateInput(Degeneracy::ConstantY))
        );
    }

    #[test]
    fn test_should_reject_vertical_data_with_fractional_x() {
        let data = vec![
            Point::new(0.1, 1.0),
            Point::new(0.1, 2.0),
            Point::new(0.1, 3.0),
            Point::new(0.1, 5.0),
            Point::new(0.1, 7.0),
        ];

        assert_eq!(
            LinearRegressionEstimator::build(&data),
            Err(RegressionError::DegenerateInput(Degeneracy::ConstantX))
        );
    }

    #[test]
    fn test_r_squared_is_undefined_for_fractional_constant_y() {
        for y in [0.1, 0.7] {
            let data: Vec<Point> = (1..=7).map(|x| Point::new(x as f64, y)).collect();

            let estimator = LinearRegressionEstimator::build(&data).unwrap();
            assert_eq!(
                estimator.r_squared(&data),
                Err(RegressionError::DegenerateInput(Degeneracy::ConstantY))
            );
        }
    }

    #[test]
    fn test_should_agree_with_linreg() {
        let data = vec![
            Point::new(1.0, 1.3),
            Point::new(2.5, 2.1),
            Point::new(3.0, 3.9),
            Point::new(4.2, 4.0),
            Point::new(7.7, 8.6),
        ];
        let (xs, ys): (Vec<f64>, Vec<f64>) = data.iter().map(|p| (p.x, p.y)).unzip();

        let (slope, intercept): (f64, f64) = linreg::linear_regression(&xs, &ys).unwrap();
        let estimator = LinearRegressionEstimator::build(&data).unwrap();

        assert!((estimator.slope() - slope).abs() < 1e-9);
        assert!((estimator.intercept() - intercept).abs() < 1e-9);
    }
}
