//! Slug-deduplicating merge of article sequences

use std::collections::HashSet;

use tracing::debug;

use crate::article::Article;

/// Concatenate `base` then `extra`, keeping the first article seen per slug
///
/// Articles with an empty slug are dropped. Since `base` is walked first,
/// its entries always win over `extra` entries sharing a slug.
pub fn merge(base: Vec<Article>, extra: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(base.len() + extra.len());

    for article in base.into_iter().chain(extra) {
        if article.slug.is_empty() {
            debug!("Skipping article without slug: {:?}", article.title);
            continue;
        }
        if !seen.insert(article.slug.clone()) {
            debug!("Skipping duplicate slug: {}", article.slug);
            continue;
        }
        merged.push(article);
    }

    merged
}
