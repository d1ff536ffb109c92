use serde_json::json;

use crate::post::post_model::CreatePostRequest;
use crate::render::list_view::render_list;
use crate::render::post_view::{render_post, render_post_not_found};
use crate::router::model::ApiResponse;
use crate::utils::error::AppError;
use crate::AppState;

pub async fn list_posts(state: &AppState) -> Result<ApiResponse, AppError> {
    let posts = state.posts.list().await?;
    Ok(ApiResponse::html(200, render_list(&state.base_url, &posts)))
}

pub async fn get_post(state: &AppState, id: Option<String>) -> Result<ApiResponse, AppError> {
    let Some(id) = id else {
        return Ok(ApiResponse::html(
            400,
            "<h1>Error: Post ID is required</h1><a href=\"/blog\">← Back to Blog</a>".to_string(),
        ));
    };

    match state.posts.get(&id).await? {
        Some(post) => Ok(ApiResponse::html(200, render_post(&state.base_url, &post))),
        None => Ok(ApiResponse::html(
            404,
            render_post_not_found(&state.base_url, &id),
        )),
    }
}

pub async fn create_post(state: &AppState, body: Option<String>) -> Result<ApiResponse, AppError> {
    let body =
        body.ok_or_else(|| AppError::Validation("Title and content are required".to_string()))?;
    let request: CreatePostRequest = serde_json::from_str(&body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    let post = state.posts.create(request).await?;
    Ok(ApiResponse::json(
        201,
        &json!({
            "message": "Blog post created successfully",
            "post": post,
        }),
    ))
}
