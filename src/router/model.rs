use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Request shape handed over by the invoking dispatcher. Field names
/// mirror the dispatcher's JSON contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    pub resource: String,
    pub http_method: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Response shape handed back to the dispatcher.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    fn with_content_type(status_code: u16, content_type: &str, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        ApiResponse {
            status_code,
            headers,
            body,
        }
    }

    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        Self::with_content_type(status_code, "application/json", body.to_string())
    }

    pub fn html(status_code: u16, body: String) -> Self {
        Self::with_content_type(status_code, "text/html", body)
    }
}

/// The three supported routes, resolved by exact match on
/// (resource, method). Anything else is unroutable.
#[derive(Debug)]
pub enum Route {
    ListPosts,
    GetPost { id: Option<String> },
    CreatePost { body: Option<String> },
}

impl Route {
    pub fn resolve(req: &ApiRequest) -> Option<Route> {
        match (req.resource.as_str(), req.http_method.as_str()) {
            ("/blog", "GET") => Some(Route::ListPosts),
            ("/blog/{id}", "GET") => Some(Route::GetPost {
                id: req
                    .path_parameters
                    .as_ref()
                    .and_then(|params| params.get("id"))
                    .filter(|id| !id.is_empty())
                    .cloned(),
            }),
            ("/blog", "POST") => Some(Route::CreatePost {
                body: req.body.clone(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(resource: &str, method: &str) -> ApiRequest {
        ApiRequest {
            resource: resource.to_string(),
            http_method: method.to_string(),
            path_parameters: None,
            body: None,
        }
    }

    #[test]
    fn resolves_the_three_routes() {
        assert!(matches!(
            Route::resolve(&request("/blog", "GET")),
            Some(Route::ListPosts)
        ));
        assert!(matches!(
            Route::resolve(&request("/blog/{id}", "GET")),
            Some(Route::GetPost { id: None })
        ));
        assert!(matches!(
            Route::resolve(&request("/blog", "POST")),
            Some(Route::CreatePost { body: None })
        ));
    }

    #[test]
    fn unknown_resource_or_method_is_unroutable() {
        assert!(Route::resolve(&request("/blog", "DELETE")).is_none());
        assert!(Route::resolve(&request("/posts", "GET")).is_none());
    }

    #[test]
    fn path_id_is_extracted() {
        let mut req = request("/blog/{id}", "GET");
        let mut params = HashMap::new();
        params.insert("id".to_string(), "abc-123".to_string());
        req.path_parameters = Some(params);

        match Route::resolve(&req) {
            Some(Route::GetPost { id }) => assert_eq!(id.as_deref(), Some("abc-123")),
            other => panic!("unexpected route: {other:?}"),
        }
    }

    #[test]
    fn responses_always_carry_cors_header() {
        let resp = ApiResponse::html(200, "<p>ok</p>".to_string());
        assert_eq!(
            resp.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("*")
        );
    }
}
