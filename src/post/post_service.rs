use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use log::info;
use uuid::Uuid;

use crate::post::post_model::{CreatePostRequest, Post};
use crate::post::post_store::PostStore;
use crate::uploader::image_service::ImageIngestor;
use crate::uploader::object_store::ObjectStore;
use crate::utils::error::AppError;

const DEFAULT_AUTHOR: &str = "Anonymous";

/// Use-case layer over the stores: list, get, create.
pub struct PostService {
    store: Arc<dyn PostStore>,
    images: ImageIngestor,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>, objects: Arc<dyn ObjectStore>) -> Self {
        PostService {
            store,
            images: ImageIngestor::new(objects),
        }
    }

    /// All posts, newest first. The underlying scan promises no order,
    /// so the sort happens here, on `createdAt` (RFC 3339 strings sort
    /// chronologically).
    pub async fn list(&self) -> Result<Vec<Post>, AppError> {
        let mut posts = self.store.list_all().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Post>, AppError> {
        self.store.get_by_id(id).await
    }

    /// Create a post with its images. Image uploads complete before the
    /// record write, so a failed upload leaves nothing persisted.
    pub async fn create(&self, request: CreatePostRequest) -> Result<Post, AppError> {
        let title = request.title.unwrap_or_default();
        let content = request.content.unwrap_or_default();
        if title.is_empty() || content.is_empty() {
            return Err(AppError::Validation(
                "Title and content are required".to_string(),
            ));
        }

        let post_id = Uuid::new_v4().to_string();
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let images = self
            .images
            .ingest_all(&post_id, &timestamp, request.images)
            .await?;

        let post = Post {
            id: post_id,
            title,
            content,
            author: request
                .author
                .filter(|author| !author.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            tags: request.tags,
            images,
            created_at: timestamp.clone(),
            updated_at: timestamp,
            published: true,
        };

        self.store.create(&post).await?;
        info!("created post {} with {} image(s)", post.id, post.images.len());
        Ok(post)
    }
}
