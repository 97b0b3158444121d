pub mod estimator;
pub mod interpretation;
pub mod parser;
pub mod regressor;
pub mod service;


pub use estimator::{Degeneracy, Point, RegressionError};
pub use interpretation::Interpretation;
pub use parser::{parse, FormatError};
pub use regressor::{fit, FitResult};
pub use service::{CalculateError, LinearRegressionService, Regressor};
