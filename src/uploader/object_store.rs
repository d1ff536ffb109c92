use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use tokio::sync::RwLock;

use crate::utils::error::AppError;

/// Binary blob storage for image payloads. Objects are written once and
/// never mutated or deleted by this system.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), AppError>;

    /// Deterministic public URL for a key. No signing, no expiry.
    fn public_url(&self, key: &str) -> String;
}

/// S3-backed implementation. Objects are written with a public-read ACL
/// so `public_url` resolves without credentials.
pub struct S3ObjectStore {
    client: Client,
    bucket_name: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket_name: String) -> Self {
        S3ObjectStore {
            client,
            bucket_name,
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("object upload failed: {e}")))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, key)
    }
}

/// In-memory implementation for tests and local development.
pub struct MemoryObjectStore {
    bucket_name: String,
    objects: RwLock<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryObjectStore {
    pub fn new(bucket_name: impl Into<String>) -> Self {
        MemoryObjectStore {
            bucket_name: bucket_name.into(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Stored bytes for a key, if any. Test hook.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(key)
            .map(|(bytes, _)| bytes.clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), (body, content_type.to_string()));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_keeps_bytes_and_builds_urls() {
        let store = MemoryObjectStore::new("blog-images");
        store
            .put("posts/p1/images/i1", b"bytes".to_vec(), "image/png")
            .await
            .unwrap();

        assert_eq!(store.get("posts/p1/images/i1").await, Some(b"bytes".to_vec()));
        assert_eq!(
            store.public_url("posts/p1/images/i1"),
            "https://blog-images.s3.amazonaws.com/posts/p1/images/i1"
        );
    }
}
