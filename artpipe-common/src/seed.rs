//! Placeholder article generation

use serde_json::{json, Value};

use crate::article::{Article, RawRecord};
use crate::normalize::{normalize, NormalizeMode};

/// Tags attached to generated articles unless configured otherwise
pub const DEFAULT_SEED_TAGS: [&str; 2] = ["php", "demo"];

/// Generate `count` placeholder articles (at least one)
///
/// Article `i` gets id `i`, title `Article i` and slug `article-i`.
pub fn generate_articles(count: usize, tags: &[String]) -> Vec<Article> {
    (1..=count.max(1))
        .map(|i| normalize(&stub(i, tags), NormalizeMode::Record))
        .collect()
}

fn stub(i: usize, tags: &[String]) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert("id".to_string(), json!(i));
    raw.insert("title".to_string(), Value::String(format!("Article {}", i)));
    raw.insert(
        "excerpt".to_string(),
        Value::String(format!("Résumé de l’article {}", i)),
    );
    raw.insert("tags".to_string(), json!(tags));
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tags() -> Vec<String> {
        DEFAULT_SEED_TAGS.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_generate_articles_shape() {
        let articles = generate_articles(3, &default_tags());
        assert_eq!(articles.len(), 3);

        let first = &articles[0];
        assert_eq!(first.id, Some(1));
        assert_eq!(first.title, "Article 1");
        assert_eq!(first.slug, "article-1");
        assert_eq!(first.excerpt.as_deref(), Some("Résumé de l’article 1"));
        assert_eq!(first.tags, vec!["php", "demo"]);
        assert!(first.published);
        assert_eq!(first.author, "Unknown");
        assert_eq!(articles[2].slug, "article-3");
    }

    #[test]
    fn test_generate_at_least_one() {
        assert_eq!(generate_articles(0, &[]).len(), 1);
    }
}
