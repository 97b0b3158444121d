use log::debug;
use thiserror::Error;

use crate::estimator::RegressionError;
use crate::parser::{self, FormatError};
use crate::regressor::{self, FitResult};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CalculateError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Regression(#[from] RegressionError),
}

/// Turns raw user text into a fitted line.
pub trait Regressor: Send + Sync {
    fn calculate(&self, input: &str) -> Result<FitResult, CalculateError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LinearRegressionService;

impl LinearRegressionService {
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for LinearRegressionService {
    fn calculate(&self, input: &str) -> Result<FitResult, CalculateError> {
        let points = parser::parse(input)?;
        debug!("Parsed {} data points", points.len());

        let result = regressor::fit(&points)?;
        debug!("Fitted {} with R² {}", result.equation, result.r_squared);

        Ok(result)
    }
}
