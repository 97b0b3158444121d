use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use log::{debug, info};
use serde_json::{json, Value};

use regression::Regressor;

use crate::types::{error_envelope, success_envelope, RegressionRequest};

const INVALID_REQUEST_MESSAGE: &str = "please provide valid data points";
const DATA_POINTS_FIELD: &str = "dataPoints";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

pub struct ServiceController {
    regressor: Arc<dyn Regressor>,
}

impl ServiceController {
    pub fn new(regressor: Arc<dyn Regressor>) -> Self {
        Self { regressor }
    }

    pub fn router(self) -> Router {
        let regressor = self.regressor.clone();

        Router::new()
            .route("/", get(ServiceController::status))
            .route("/api/health", get(ServiceController::status))
            .route(
                "/calculate",
                post({
                    let regressor = regressor.clone();
                    move |request: Request| async move {
                        match ServiceController::read_form(request).await {
                            Ok(payload) => {
                                ServiceController::calculate(regressor.clone(), payload).await
                            }
                            Err(reason) => ServiceController::reject(reason),
                        }
                    }
                }),
            )
            .route(
                "/api/calculate",
                post({
                    let regressor = regressor.clone();
                    move |payload: Result<Json<RegressionRequest>, JsonRejection>| async move {
                        match payload {
                            Ok(Json(payload)) => {
                                ServiceController::calculate(regressor.clone(), payload).await
                            }
                            Err(rejection) => ServiceController::reject(rejection),
                        }
                    }
                }),
            )
    }

    /// Bind a form body, either url-encoded or multipart as sent by browser `FormData`
    async fn read_form(request: Request) -> Result<RegressionRequest, String> {
        let is_multipart = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(MULTIPART_FORM_DATA));

        if !is_multipart {
            let Form(payload) = Form::<RegressionRequest>::from_request(request, &())
                .await
                .map_err(|err| err.to_string())?;
            return Ok(payload);
        }

        let mut multipart =
            Multipart::from_request(request, &()).await.map_err(|err| err.to_string())?;
        let mut payload = RegressionRequest::default();
        while let Some(field) = multipart.next_field().await.map_err(|err| err.to_string())? {
            if field.name() == Some(DATA_POINTS_FIELD) {
                payload.data_points = field.text().await.map_err(|err| err.to_string())?;
            }
        }
        Ok(payload)
    }

    fn reject(reason: impl Display) -> (StatusCode, Json<Value>) {
        debug!("Rejecting regression request: {}", reason);
        (StatusCode::OK, Json(error_envelope(INVALID_REQUEST_MESSAGE)))
    }

    /// Health check endpoint
    pub async fn status() -> (StatusCode, Json<Value>) {
        let response = json!({
            "message": "Service is running...",
            "status": "ok"
        });
        (StatusCode::OK, Json(response))
    }

    /// Fit a line to the submitted data points
    ///
    /// Domain failures are reported inside the envelope with `success: false`, never as an
    /// HTTP error status.
    pub async fn calculate(
        regressor: Arc<dyn Regressor>,
        payload: RegressionRequest,
    ) -> (StatusCode, Json<Value>) {
        if !payload.is_valid() {
            return ServiceController::reject("blank data points");
        }

        match regressor.calculate(&payload.data_points) {
            Ok(result) => {
                info!("Calculated regression: {}", result.equation);
                (StatusCode::OK, Json(success_envelope(result)))
            }
            Err(err) => {
                info!("Regression request failed: {}", err);
                (StatusCode::OK, Json(error_envelope(err)))
            }
        }
    }
}
