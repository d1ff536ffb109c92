//! Content-publishing backend: list posts, fetch a post by id, create a
//! post with optional attached images.
//!
//! The crate is built around a per-invocation `handle` function that
//! takes a structured [`router::model::ApiRequest`] and returns a
//! structured [`router::model::ApiResponse`]; the network dispatcher in
//! front of it is pluggable (`main.rs` ships a local actix-web harness).
//! Persistence goes through the [`post::post_store::PostStore`] and
//! [`uploader::object_store::ObjectStore`] traits, injected at
//! construction, with DynamoDB/S3 and in-memory implementations.

use std::sync::Arc;

pub mod config;
pub mod post;
pub mod render;
pub mod router;
pub mod uploader;
pub mod utils;

use post::post_service::PostService;
use post::post_store::PostStore;
use uploader::object_store::ObjectStore;

/// Per-deployment dependencies handed to the router.
pub struct AppState {
    pub posts: PostService,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        post_store: Arc<dyn PostStore>,
        object_store: Arc<dyn ObjectStore>,
        base_url: String,
    ) -> Self {
        AppState {
            posts: PostService::new(post_store, object_store),
            base_url,
        }
    }
}
