use std::env;

use crate::utils::error::AppError;

/// Deployment configuration loaded from environment variables. All
/// three values are required; there are no defaults.
pub struct Config {
    /// Durable store table holding post records.
    pub table_name: String,
    /// Object store bucket holding image payloads.
    pub bucket_name: String,
    /// Public base URL used for absolute links in rendered HTML.
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Config {
            table_name: required("TABLE_NAME")?,
            bucket_name: required("BUCKET_NAME")?,
            base_url: required("BASE_URL")?,
        })
    }
}

fn required(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Config(format!("{name} is required")))
}
