use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use tokio::sync::RwLock;

use crate::post::post_model::{ImageRef, Post};
use crate::utils::error::AppError;

/// Fixed sort-key discriminator for post records. Keeps the partition
/// free for future per-post sub-records (comments etc.) without
/// colliding with the post itself.
const SORT_KEY_POST: &str = "POST";

/// Durable key-value persistence for post records.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Full scan. Callers sort; the store promises nothing about order.
    async fn list_all(&self) -> Result<Vec<Post>, AppError>;

    /// Absence is a valid outcome, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, AppError>;

    /// Unconditional put. With uuid v4 ids a key collision is not a
    /// practical concern, so there is no existence check.
    async fn create(&self, post: &Post) -> Result<(), AppError>;
}

/// DynamoDB-backed implementation.
pub struct DynamoPostStore {
    client: Client,
    table_name: String,
}

impl DynamoPostStore {
    pub fn new(client: Client, table_name: String) -> Self {
        DynamoPostStore { client, table_name }
    }
}

#[async_trait]
impl PostStore for DynamoPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        let mut posts = Vec::new();
        let mut start_key = None;
        loop {
            let resp = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| AppError::Storage(format!("scan failed: {e}")))?;

            for item in resp.items.unwrap_or_default() {
                posts.push(post_from_item(&item)?);
            }

            start_key = resp.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }
        Ok(posts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("pk", AttributeValue::S(id.to_string()))
            .key("sk", AttributeValue::S(SORT_KEY_POST.to_string()))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("get failed: {e}")))?;

        resp.item.map(|item| post_from_item(&item)).transpose()
    }

    async fn create(&self, post: &Post) -> Result<(), AppError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(post_to_item(post)))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("put failed: {e}")))?;
        Ok(())
    }
}

fn post_to_item(post: &Post) -> HashMap<String, AttributeValue> {
    let images = post
        .images
        .iter()
        .map(|image| {
            let mut m = HashMap::new();
            m.insert("id".to_string(), AttributeValue::S(image.id.clone()));
            m.insert("url".to_string(), AttributeValue::S(image.url.clone()));
            m.insert(
                "originalName".to_string(),
                AttributeValue::S(image.original_name.clone()),
            );
            m.insert(
                "uploadedAt".to_string(),
                AttributeValue::S(image.uploaded_at.clone()),
            );
            AttributeValue::M(m)
        })
        .collect();

    let tags = post
        .tags
        .iter()
        .map(|tag| AttributeValue::S(tag.clone()))
        .collect();

    let mut item = HashMap::new();
    item.insert("pk".to_string(), AttributeValue::S(post.id.clone()));
    item.insert(
        "sk".to_string(),
        AttributeValue::S(SORT_KEY_POST.to_string()),
    );
    item.insert("id".to_string(), AttributeValue::S(post.id.clone()));
    item.insert("title".to_string(), AttributeValue::S(post.title.clone()));
    item.insert(
        "content".to_string(),
        AttributeValue::S(post.content.clone()),
    );
    item.insert("author".to_string(), AttributeValue::S(post.author.clone()));
    item.insert("tags".to_string(), AttributeValue::L(tags));
    item.insert("images".to_string(), AttributeValue::L(images));
    item.insert(
        "createdAt".to_string(),
        AttributeValue::S(post.created_at.clone()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(post.updated_at.clone()),
    );
    item.insert(
        "published".to_string(),
        AttributeValue::Bool(post.published),
    );
    item
}

fn post_from_item(item: &HashMap<String, AttributeValue>) -> Result<Post, AppError> {
    let images = match item.get("images") {
        Some(AttributeValue::L(list)) => list
            .iter()
            .filter_map(|value| match value {
                AttributeValue::M(m) => Some(ImageRef {
                    id: string_attr(m, "id"),
                    url: string_attr(m, "url"),
                    original_name: string_attr(m, "originalName"),
                    uploaded_at: string_attr(m, "uploadedAt"),
                }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    let tags = match item.get("tags") {
        Some(AttributeValue::L(list)) => list
            .iter()
            .filter_map(|value| value.as_s().ok().cloned())
            .collect(),
        _ => Vec::new(),
    };

    Ok(Post {
        id: require_attr(item, "id")?,
        title: require_attr(item, "title")?,
        content: require_attr(item, "content")?,
        author: string_attr(item, "author"),
        tags,
        images,
        created_at: string_attr(item, "createdAt"),
        updated_at: string_attr(item, "updatedAt"),
        published: matches!(item.get("published"), Some(AttributeValue::Bool(true))),
    })
}

fn string_attr(item: &HashMap<String, AttributeValue>, key: &str) -> String {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .unwrap_or_default()
}

fn require_attr(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, AppError> {
    item.get(key)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| AppError::Storage(format!("post item missing attribute `{key}`")))
}

/// In-memory implementation for tests and local development. Keyed by
/// the same composite (pk, sk) pair the durable store uses.
#[derive(Default)]
pub struct MemoryPostStore {
    records: RwLock<HashMap<(String, String), Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, AppError> {
        let key = (id.to_string(), SORT_KEY_POST.to_string());
        Ok(self.records.read().await.get(&key).cloned())
    }

    async fn create(&self, post: &Post) -> Result<(), AppError> {
        let key = (post.id.clone(), SORT_KEY_POST.to_string());
        self.records.write().await.insert(key, post.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "p1".into(),
            title: "Hello".into(),
            content: "World".into(),
            author: "Ada".into(),
            tags: vec!["rust".into(), "blog".into()],
            images: vec![ImageRef {
                id: "i1".into(),
                url: "https://bucket.s3.amazonaws.com/posts/p1/images/i1".into(),
                original_name: "a.png".into(),
                uploaded_at: "2024-01-05T15:04:05.000Z".into(),
            }],
            created_at: "2024-01-05T15:04:05.000Z".into(),
            updated_at: "2024-01-05T15:04:05.000Z".into(),
            published: true,
        }
    }

    #[test]
    fn item_mapping_round_trips() {
        let post = sample_post();
        let item = post_to_item(&post);
        assert_eq!(item.get("pk"), Some(&AttributeValue::S("p1".into())));
        assert_eq!(item.get("sk"), Some(&AttributeValue::S("POST".into())));
        let back = post_from_item(&item).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn from_item_rejects_missing_title() {
        let mut item = post_to_item(&sample_post());
        item.remove("title");
        assert!(post_from_item(&item).is_err());
    }

    #[tokio::test]
    async fn memory_store_get_and_list() {
        let store = MemoryPostStore::new();
        let post = sample_post();
        store.create(&post).await.unwrap();

        assert_eq!(store.get_by_id("p1").await.unwrap(), Some(post));
        assert_eq!(store.get_by_id("missing").await.unwrap(), None);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
