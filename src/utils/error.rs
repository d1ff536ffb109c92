use serde_json::json;
use thiserror::Error;

use crate::router::model::ApiResponse;

/// Failures a use-case can surface to the router.
///
/// Absence of a post is deliberately *not* a variant here: `get_by_id`
/// returns `Option` and the controller renders a proper 404 page for
/// `None`. This enum covers only validation rejections and downstream
/// infrastructure failures.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Validation(_) => 400,
            AppError::Config(_) => 500,
            AppError::Storage(_) => 500,
        }
    }

    /// Convert into the wire-level error response: a JSON body of the
    /// form `{"error": <message>}`. The raw message is exposed on 500s,
    /// matching the existing contract; callers handle no secrets today.
    pub fn to_response(&self) -> ApiResponse {
        ApiResponse::json(self.status_code(), &json!({ "error": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_bare_message() {
        let err = AppError::Validation("Title and content are required".into());
        let resp = err.to_response();
        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.body, r#"{"error":"Title and content are required"}"#);
    }

    #[test]
    fn storage_maps_to_500() {
        let err = AppError::Storage("table unavailable".into());
        assert_eq!(err.status_code(), 500);
    }
}
