use super::FaqEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An editorial article, normalized from one raw record. Records missing any
/// required field are dropped whole during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub content: String,
    pub banner_url: String,
    pub category: String,
    pub slug: String,
    pub date: DateTime<Utc>,
    pub metadescription: String,
    pub faq: Vec<FaqEntry>,
    pub structured_schema: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
