// src/normalize/mod.rs
//
// Turns raw record-store payloads into typed entities. The upstream store is
// schemaless: field casing drifts between endpoints, sequence fields arrive
// as scalars, and timestamps go missing. Every read goes through a candidate
// key table and a coercion helper instead of a direct key access.

use crate::domain::{BlogPost, FaqEntry, Tool};
use chrono::{DateTime, Utc};
use serde_json::Value;
use thiserror::Error;

/// A record failed its required-field schema. Reported for diagnostics and
/// the record is skipped; never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: "required value is missing or empty".to_string(),
        }
    }
}

/// Ordered candidate raw keys for one logical field; the first present,
/// non-null key wins.
type Candidates = &'static [&'static str];

const TOOL_ID: Candidates = &["Id", "id"];
const TOOL_NAME: Candidates = &["Name", "name"];
const TOOL_FAQ: Candidates = &["FAQ", "faq"];
const DATE: Candidates = &["date", "created_at"];
// The misspelled key is what the store actually serves today.
const POST_STRUCTURED_SCHEMA: Candidates = &["strucured_schema", "structured_schema"];

/// Required fields per entity kind, validated the same way for both: some
/// candidate key must hold a non-empty string.
const TOOL_REQUIRED: &[(&str, Candidates)] = &[("id", TOOL_ID)];
const POST_REQUIRED: &[(&str, Candidates)] = &[
    ("title", &["title"]),
    ("content", &["content"]),
    ("banner_url", &["banner_url"]),
    ("category", &["category"]),
    ("slug", &["slug"]),
];

fn resolve<'a>(record: &'a Value, keys: Candidates) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key))
        .filter(|value| !value.is_null())
}

fn check_required(record: &Value, schema: &[(&str, Candidates)]) -> Result<(), ValidationError> {
    for (field, keys) in schema {
        match resolve(record, keys).and_then(Value::as_str) {
            Some(value) if !value.is_empty() => {}
            _ => return Err(ValidationError::missing(field)),
        }
    }
    Ok(())
}

fn text(record: &Value, keys: Candidates) -> String {
    resolve(record, keys)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_text(record: &Value, keys: Candidates) -> Option<String> {
    resolve(record, keys)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Sequence coercion: any non-array value, scalar or absent alike, collapses
/// to the empty sequence. Non-string elements inside an array are dropped.
fn text_list(record: &Value, keys: Candidates) -> Vec<String> {
    match resolve(record, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn faq_list(record: &Value, keys: Candidates) -> Vec<FaqEntry> {
    match resolve(record, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| FaqEntry {
                question: item
                    .get("question")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                answer: item
                    .get("answer")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn number(record: &Value, keys: Candidates) -> Option<f64> {
    resolve(record, keys).and_then(Value::as_f64)
}

/// An unparseable timestamp counts as absent.
fn timestamp(record: &Value, keys: Candidates) -> Option<DateTime<Utc>> {
    resolve(record, keys)
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

pub fn normalize_tool(record: &Value) -> Result<Tool, ValidationError> {
    check_required(record, TOOL_REQUIRED)?;
    Ok(Tool {
        id: text(record, TOOL_ID),
        name: text(record, TOOL_NAME),
        description: text(record, &["description"]),
        banner_url: text(record, &["banner_url"]),
        categories: text(record, &["categories"]),
        // Fetch-time fallback: re-fetching an undated record yields a fresh
        // date. Accepted non-determinism.
        date: timestamp(record, DATE).unwrap_or_else(Utc::now),
        features: text_list(record, &["features"]),
        advantage: text_list(record, &["advantage"]),
        inconvenient: text_list(record, &["inconvenient"]),
        source_url: text_list(record, &["source_url"]),
        youtube_url: text_list(record, &["youtube_url"]),
        image: text_list(record, &["image"]),
        logo: opt_text(record, &["logo"]),
        tagline: opt_text(record, &["tagline"]),
        pricing: opt_text(record, &["pricing"]),
        website: opt_text(record, &["website"]),
        rating: number(record, &["rating"]),
        slug: text(record, &["slug"]),
        faq: faq_list(record, TOOL_FAQ),
    })
}

pub fn normalize_blog_post(record: &Value) -> Result<BlogPost, ValidationError> {
    check_required(record, POST_REQUIRED)?;
    Ok(BlogPost {
        title: text(record, &["title"]),
        content: text(record, &["content"]),
        banner_url: text(record, &["banner_url"]),
        category: text(record, &["category"]),
        slug: text(record, &["slug"]),
        date: timestamp(record, DATE).unwrap_or_else(Utc::now),
        metadescription: text(record, &["metadescription"]),
        faq: faq_list(record, &["faq", "FAQ"]),
        structured_schema: text_list(record, POST_STRUCTURED_SCHEMA),
        created_at: timestamp(record, &["created_at"]),
        updated_at: timestamp(record, &["updated_at"]),
    })
}
