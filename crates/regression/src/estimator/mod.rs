use std::error::Error;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use linear_regression_estimator::{Degeneracy, LinearRegressionEstimator, RegressionError};

pub mod linear_regression_estimator;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct DataPoint<Input, Output> {
    pub x: Input,
    pub y: Output,
}

impl<Input, Output> DataPoint<Input, Output> {
    pub fn new(x: Input, y: Output) -> Self {
        Self { x, y }
    }
}

/// A 2-D observation as read from user input.
pub type Point = DataPoint<f64, f64>;

pub trait Estimator<'de, Input, Output>: Serialize + Deserialize<'de> + Debug + Sized {
    type Error: Error + Debug;

    fn build(data: &[DataPoint<Input, Output>]) -> Result<Self, Self::Error>;

    fn estimate(&self, x: Input) -> Output;
}
