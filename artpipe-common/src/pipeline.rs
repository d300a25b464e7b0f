//! Named pipeline steps over normalized articles
//!
//! Filter, limit, sort and reduce, each usable on its own.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::article::Article;

/// Filter predicate for published articles
pub fn is_published(article: &Article) -> bool {
    article.published
}

/// Keep only published articles, preserving order
pub fn published_only(articles: Vec<Article>) -> Vec<Article> {
    articles.into_iter().filter(is_published).collect()
}

/// Keep the first `limit` articles; `None` keeps everything
///
/// A limit below 1 is raised to 1.
pub fn take_limit(mut articles: Vec<Article>, limit: Option<usize>) -> Vec<Article> {
    if let Some(limit) = limit {
        articles.truncate(limit.max(1));
    }
    articles
}

/// Sort by views, most viewed first; ties keep their input order
pub fn sort_by_views_desc(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.views.cmp(&a.views));
}

/// Aggregate figures over a set of articles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of articles
    pub count: usize,
    /// Sum of all view counts
    pub views_sum: u64,
    /// Number of published articles
    pub published: usize,
    /// Article count per author
    pub by_author: BTreeMap<String, usize>,
}

/// Fold articles into a [`Summary`]
pub fn summarize<'a, I>(articles: I) -> Summary
where
    I: IntoIterator<Item = &'a Article>,
{
    articles.into_iter().fold(Summary::default(), |mut acc, article| {
        acc.count += 1;
        acc.views_sum = acc.views_sum.saturating_add(article.views);
        if article.published {
            acc.published += 1;
        }
        *acc.by_author.entry(article.author.clone()).or_insert(0) += 1;
        acc
    })
}
