use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Content type of a host post. Author info only renders for `Download`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Download,
    Post,
    Page,
    Other(String),
}

impl PostType {
    pub fn is_download(&self) -> bool {
        matches!(self, PostType::Download)
    }
}

/// A post-like content record owned by the host content system.
/// Read-only to the widget layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub author_id: u64,
    pub post_type: PostType,
}

impl ContentItem {
    pub fn download(author_id: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            post_type: PostType::Download,
        }
    }
}

/// Read-only view of a content author, assembled by the host user
/// directory.
///
/// `store_name` and `vendor_profile_url` are populated by the vendor
/// marketplace extension and are `None` whenever it is inactive. Consumers
/// must still gate on the vendor capability flag before using them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: u64,
    pub display_name: String,
    pub registered_at: DateTime<Utc>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub vendor_profile_url: Option<String>,
}
