use std::sync::Arc;

use base64::alphabet;
use base64::engine::{self, DecodePaddingMode, Engine};
use futures_util::future::try_join_all;
use log::debug;
use uuid::Uuid;

use crate::post::post_model::{ImageData, ImageRef, ImageUpload};
use crate::uploader::object_store::ObjectStore;
use crate::utils::error::AppError;

const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";
const DEFAULT_ORIGINAL_NAME: &str = "untitled";

/// Accepts base64 input with or without padding.
const LENIENT_BASE64: engine::GeneralPurpose = engine::GeneralPurpose::new(
    &alphabet::STANDARD,
    engine::GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodes client image payloads and persists them to the object store.
pub struct ImageIngestor {
    store: Arc<dyn ObjectStore>,
}

impl ImageIngestor {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        ImageIngestor { store }
    }

    /// Persist every image of a create request. Uploads run
    /// concurrently; result order matches input order, and a single
    /// failure aborts the whole batch before the post itself is ever
    /// written.
    pub async fn ingest_all(
        &self,
        post_id: &str,
        uploaded_at: &str,
        uploads: Vec<ImageUpload>,
    ) -> Result<Vec<ImageRef>, AppError> {
        try_join_all(
            uploads
                .into_iter()
                .map(|upload| self.ingest_one(post_id, uploaded_at, upload)),
        )
        .await
    }

    async fn ingest_one(
        &self,
        post_id: &str,
        uploaded_at: &str,
        upload: ImageUpload,
    ) -> Result<ImageRef, AppError> {
        let image_id = Uuid::new_v4().to_string();
        let key = format!("posts/{post_id}/images/{image_id}");
        let content_type = upload
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        let bytes = decode_image_data(upload.data);

        debug!("uploading image {key} ({} bytes, {content_type})", bytes.len());
        self.store.put(&key, bytes, &content_type).await?;

        Ok(ImageRef {
            id: image_id,
            url: self.store.public_url(&key),
            original_name: upload
                .name
                .unwrap_or_else(|| DEFAULT_ORIGINAL_NAME.to_string()),
            uploaded_at: uploaded_at.to_string(),
        })
    }
}

/// Raw bytes pass through; strings are base64-decoded. Decoding is
/// permissive: input that is not well-formed base64 falls back to its
/// raw bytes instead of failing the request.
fn decode_image_data(data: ImageData) -> Vec<u8> {
    match data {
        ImageData::Bytes(bytes) => bytes,
        ImageData::Base64(text) => LENIENT_BASE64
            .decode(text.trim())
            .unwrap_or_else(|_| text.into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploader::object_store::MemoryObjectStore;

    #[test]
    fn base64_and_raw_bytes_decode_identically() {
        let from_b64 = decode_image_data(ImageData::Base64("aGVsbG8=".into()));
        let from_bytes = decode_image_data(ImageData::Bytes(b"hello".to_vec()));
        assert_eq!(from_b64, from_bytes);
    }

    #[test]
    fn unpadded_base64_is_accepted() {
        assert_eq!(decode_image_data(ImageData::Base64("aGVsbG8".into())), b"hello");
    }

    #[test]
    fn malformed_base64_falls_back_to_raw_bytes() {
        let out = decode_image_data(ImageData::Base64("not base64!!!".into()));
        assert_eq!(out, b"not base64!!!");
    }

    #[tokio::test]
    async fn ingest_namespaces_keys_under_the_post() {
        let store = Arc::new(MemoryObjectStore::new("blog-images"));
        let ingestor = ImageIngestor::new(store.clone());

        let refs = ingestor
            .ingest_all(
                "post-1",
                "2024-01-05T15:04:05.000Z",
                vec![ImageUpload {
                    data: ImageData::Base64("aGVsbG8=".into()),
                    name: Some("a.png".into()),
                    content_type: Some("image/png".into()),
                }],
            )
            .await
            .unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].original_name, "a.png");
        assert_eq!(refs[0].uploaded_at, "2024-01-05T15:04:05.000Z");
        assert!(refs[0].url.contains("posts/post-1/images/"));

        let key = format!("posts/post-1/images/{}", refs[0].id);
        assert_eq!(store.get(&key).await, Some(b"hello".to_vec()));
    }

    #[tokio::test]
    async fn name_and_type_default_when_absent() {
        let store = Arc::new(MemoryObjectStore::new("blog-images"));
        let ingestor = ImageIngestor::new(store);

        let refs = ingestor
            .ingest_all(
                "post-1",
                "2024-01-05T15:04:05.000Z",
                vec![ImageUpload {
                    data: ImageData::Bytes(vec![1, 2, 3]),
                    name: None,
                    content_type: None,
                }],
            )
            .await
            .unwrap();

        assert_eq!(refs[0].original_name, "untitled");
    }
}
