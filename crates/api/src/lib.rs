pub mod layers;
pub mod service_controller;
pub mod types;

pub use service_controller::ServiceController;
