use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fetched comment, in the shape the comment exporter writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub author: String,
    pub text: String,
    pub like_count: u32,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_reply: bool,
}
