//! Canonical article record

use serde::{Deserialize, Serialize};

/// Untyped input record (CSV row, generated stub, JSON object)
///
/// Converted into an [`Article`] exactly once, by [`crate::normalize`].
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Normalized article
///
/// Invariants upheld by the normalizer:
/// - `title` and `author` carry no surrounding whitespace
/// - `excerpt` is never `Some("")`
/// - `slug` is lowercase ASCII alphanumerics separated by single hyphens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub views: u64,
    pub published: bool,
    pub author: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Article {
    /// Uniqueness key within any stored collection
    pub fn slug(&self) -> &str {
        &self.slug
    }
}
