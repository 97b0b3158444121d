use serde::{Deserialize, Serialize};

use crate::estimator::{Estimator, LinearRegressionEstimator, Point, RegressionError};

/// Outcome of fitting a line to a set of points, shaped for rendering.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    // "y = {slope}x + {intercept}" with 4 fractional digits each
    pub equation: String,
    #[serde(rename = "rSquared", alias = "rsquared")]
    pub r_squared: f64,
    // The input, in input order
    #[serde(rename = "dataPoints")]
    pub points: Vec<Point>,
    // The fitted line evaluated at the smallest and largest x of the input
    #[serde(rename = "regressionLine")]
    pub line: [Point; 2],
}

/// Fits `y = slope * x + intercept` to `points` by ordinary least squares.
pub fn fit(points: &[Point]) -> Result<FitResult, RegressionError> {
    let estimator = LinearRegressionEstimator::build(points)?;
    let r_squared = estimator.r_squared(points)?;

    let (slope, intercept) = (estimator.slope(), estimator.intercept());
    let (min_x, max_x) = x_extent(points);

    Ok(FitResult {
        slope,
        intercept,
        equation: format_equation(slope, intercept),
        r_squared,
        points: points.to_vec(),
        line: [
            Point::new(min_x, estimator.estimate(min_x)),
            Point::new(max_x, estimator.estimate(max_x)),
        ],
    })
}

// The sign stays inside the number: a negative intercept renders as "+ -3.0000"
fn format_equation(slope: f64, intercept: f64) -> String {
    format!("y = {:.4}x + {:.4}", slope, intercept)
}

fn x_extent(points: &[Point]) -> (f64, f64) {
    let first = points[0].x;
    points.iter().skip(1).fold((first, first), |(min, max), point| {
        (if point.x < min { point.x } else { min }, if point.x > max { point.x } else { max })
    })
}
