use serde::{Deserialize, Serialize};

/// A published blog post as stored and as returned on the wire.
///
/// The durable composite key (`pk = id`, `sk = "POST"`) is an adapter
/// concern and lives in the store's item mapping, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub images: Vec<ImageRef>,
    pub created_at: String,
    pub updated_at: String,
    pub published: bool,
}

/// Metadata for one uploaded image, embedded in its post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub id: String,
    pub url: String,
    pub original_name: String,
    pub uploaded_at: String,
}

/// Client payload for `POST /blog`. `title` and `content` are optional
/// here so a missing field reaches validation instead of failing
/// deserialization with an opaque message.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageUpload>,
}

/// One image in a create request.
#[derive(Debug, Deserialize)]
pub struct ImageUpload {
    pub data: ImageData,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

/// Image payload: a base64 string or raw bytes as a JSON number array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageData {
    Base64(String),
    Bytes(Vec<u8>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_with_camel_case_fields() {
        let post = Post {
            id: "p1".into(),
            title: "Hello".into(),
            content: "World".into(),
            author: "Anonymous".into(),
            tags: vec![],
            images: vec![],
            created_at: "2024-01-05T15:04:05.000Z".into(),
            updated_at: "2024-01-05T15:04:05.000Z".into(),
            published: true,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["createdAt"], "2024-01-05T15:04:05.000Z");
        assert_eq!(json["published"], true);
    }

    #[test]
    fn create_request_accepts_minimal_body() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"t","content":"c"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("t"));
        assert!(req.tags.is_empty());
        assert!(req.images.is_empty());
    }

    #[test]
    fn image_data_accepts_string_and_byte_array() {
        let s: ImageData = serde_json::from_str(r#""aGVsbG8=""#).unwrap();
        assert!(matches!(s, ImageData::Base64(_)));
        let b: ImageData = serde_json::from_str("[104,101,108,108,111]").unwrap();
        match b {
            ImageData::Bytes(bytes) => assert_eq!(bytes, b"hello"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
