use log::{error, info};
use serde_json::json;

use crate::post::post_controller;
use crate::router::model::{ApiRequest, ApiResponse, Route};
use crate::AppState;

/// Single entry point per invocation: resolve the route, run the
/// use-case, and turn any error into the structured 4xx/5xx response.
/// Always returns exactly one response.
pub async fn handle(state: &AppState, request: ApiRequest) -> ApiResponse {
    info!("{} {}", request.http_method, request.resource);

    let result = match Route::resolve(&request) {
        Some(Route::ListPosts) => post_controller::list_posts(state).await,
        Some(Route::GetPost { id }) => post_controller::get_post(state, id).await,
        Some(Route::CreatePost { body }) => post_controller::create_post(state, body).await,
        None => {
            return ApiResponse::json(404, &json!({ "error": "Route not found" }));
        }
    };

    result.unwrap_or_else(|err| {
        if err.status_code() >= 500 {
            error!("request failed: {err}");
        }
        err.to_response()
    })
}
