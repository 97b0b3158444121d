use axum::http::Method;
use log::warn;
use tower_http::cors::{Any, CorsLayer};

use config::CorsConfig;

pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|method| match Method::from_bytes(method.as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                warn!("Ignoring invalid CORS method: {}", method);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(Any).allow_methods(methods)
}
