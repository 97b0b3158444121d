use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serde_valid::Validate;

use regression::{FitResult, Interpretation};

// Body of the calculate endpoints, as a form or as json
#[derive(Deserialize, Serialize, Validate, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegressionRequest {
    #[serde(default)]
    #[validate(min_length = 1)]
    pub data_points: String,
}

impl RegressionRequest {
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok() && !self.data_points.trim().is_empty()
    }
}

#[derive(Serialize, Debug)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub result: FitResult,
    pub interpretation: String,
}

impl From<FitResult> for CalculationResponse {
    fn from(result: FitResult) -> Self {
        let interpretation = Interpretation::of(&result).to_string();
        Self { result, interpretation }
    }
}

pub fn success_envelope(result: FitResult) -> Value {
    json!({ "success": true, "result": CalculationResponse::from(result) })
}

pub fn error_envelope(message: impl Display) -> Value {
    json!({ "success": false, "error": message.to_string() })
}
