use std::io::{self, Read};

use log::{error, info};
use serde_json::Value;

use api::types::{error_envelope, success_envelope};
use regression::{LinearRegressionService, Regressor};

const STDIN_PATH: &str = "-";

/// Fits the data points read from `path` and prints the result envelope to stdout.
/// Returns whether the fit succeeded.
pub fn run_fit(path: &str) -> Result<bool, io::Error> {
    info!("Fitting data points from {}", path);

    let input = read_input(path)?;
    let (succeeded, envelope) = fit_input(&LinearRegressionService::new(), &input);

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(succeeded)
}

fn read_input(path: &str) -> Result<String, io::Error> {
    if path == STDIN_PATH {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
    }
}

fn fit_input(regressor: &impl Regressor, input: &str) -> (bool, Value) {
    match regressor.calculate(input) {
        Ok(result) => (true, success_envelope(result)),
        Err(err) => {
            error!("Failed to fit data points: {}", err);
            (false, error_envelope(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use regression::LinearRegressionService;

    use crate::fit::{fit_input, read_input};

    #[test]
    fn test_fit_input_success() {
        let (succeeded, envelope) =
            fit_input(&LinearRegressionService::new(), "1 3\n2 5\n3 7\n");

        assert!(succeeded);
        assert_eq!(envelope["success"], true);
        assert_eq!(envelope["result"]["equation"], "y = 2.0000x + 1.0000");
    }

    #[test]
    fn test_fit_input_failure() {
        let (succeeded, envelope) = fit_input(&LinearRegressionService::new(), "1,x");

        assert!(!succeeded);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["error"], "values must be valid numbers");
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_input("no-such-points-file.txt").is_err());
    }
}
