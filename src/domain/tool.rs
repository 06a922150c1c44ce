use super::FaqEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogued software product, normalized from one raw record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub banner_url: String,
    /// Single free-text category label; empty when the source omits it.
    pub categories: String,
    pub date: DateTime<Utc>,
    pub features: Vec<String>,
    pub advantage: Vec<String>,
    pub inconvenient: Vec<String>,
    pub source_url: Vec<String>,
    pub youtube_url: Vec<String>,
    pub image: Vec<String>,
    pub logo: Option<String>,
    pub tagline: Option<String>,
    pub pricing: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    /// Routing identity for detail lookups. Uniqueness is the data source's
    /// responsibility, not this layer's.
    pub slug: String,
    pub faq: Vec<FaqEntry>,
}
