use std::ops::Deref;

use derive_more::{Display, From, Into};
use serde::Deserialize;
use serde_valid::yaml::FromYamlStr;
use serde_valid::{UniqueItemsError, Validate, ValidateUniqueItems};

// HTTP methods the CORS layer may be configured with
const SUPPORTED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "OPTIONS"];

// Config Type
#[derive(Debug, Clone)]
pub struct Config {
    // API Server Configuration
    pub server: ServerConfig,
    // Cross-origin configuration applied to every route
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_file(file_path: &str) -> Result<Self, ConfigError> {
        let config_file_content = std::fs::read_to_string(file_path)?;
        Self::from_yaml_str(&config_file_content)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let raw_config = RawConfig::from_yaml_str(s)?;

        fn verify_method(method: &str) -> Result<(), ConfigError> {
            if !SUPPORTED_METHODS.contains(&method) {
                return Err(ConfigError::MethodNotSupported(method.to_string()));
            }
            Ok(())
        }

        if raw_config.cors.allowed_methods.is_empty() {
            return Err(ConfigError::NoAllowedMethods);
        }

        for method in raw_config.cors.allowed_methods.iter() {
            verify_method(method)?;
        }

        Ok(Config { server: raw_config.server, cors: raw_config.cors })
    }
}

#[derive(Debug, From, Display)]
pub enum ConfigError {
    #[display("Method not supported: {}", _0)]
    #[from(ignore)]
    MethodNotSupported(String),

    #[display("At least one allowed method must be configured")]
    #[from(ignore)]
    NoAllowedMethods,

    #[display("Serde Error: {}", _0)]
    SerdeError(serde_valid::Error<serde_yaml::Error>),

    #[display("Error Reading Config File: {}", _0)]
    IoError(std::io::Error),
}

impl std::error::Error for ConfigError {}

// Intermediate Config Type as Deserialization Target
#[derive(Debug, Deserialize, Validate)]
pub struct RawConfig {
    #[validate]
    pub server: ServerConfig,
    #[validate]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct ServerConfig {
    // The port the server will listen on
    #[validate(minimum = 1)]
    pub port: u16,

    // The host the server will listen on
    #[validate(min_length = 1)]
    pub host: String,

    // Upper bound on the size of a request body
    #[validate(minimum = 1)]
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct CorsConfig {
    #[validate(unique_items)]
    pub allowed_methods: AllowedMethods,
}

#[derive(Debug, Deserialize, From, Into, Clone)]
pub struct AllowedMethods(Vec<String>);

impl ValidateUniqueItems for AllowedMethods {
    fn validate_unique_items(&self) -> Result<(), UniqueItemsError> {
        self.0.validate_unique_items()
    }
}

impl Deref for AllowedMethods {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub fn get_sample_config() -> Config {
    Config::from_file("../../config.yaml.example").unwrap()
}
