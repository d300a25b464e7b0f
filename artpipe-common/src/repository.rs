//! Article repositories
//!
//! [`ArticleRepository`] is the seam a real store would plug into;
//! [`MemoryArticleRepository`] is the only implementation and keeps
//! nothing beyond the lifetime of the process.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::article::Article;
use crate::{Error, Result};

/// Insert-only article storage keyed by slug
pub trait ArticleRepository {
    /// All stored articles in insertion order
    fn all(&self) -> Vec<Article>;

    /// Insert an article, rejecting a slug that is already stored
    fn save(&mut self, article: Article) -> Result<()>;
}

/// In-process repository backed by a vector plus a slug index
#[derive(Debug, Default)]
pub struct MemoryArticleRepository {
    articles: Vec<Article>,
    by_slug: HashMap<String, usize>,
}

impl MemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored article by slug
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&i| &self.articles[i])
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleRepository for MemoryArticleRepository {
    fn all(&self) -> Vec<Article> {
        self.articles.clone()
    }

    fn save(&mut self, article: Article) -> Result<()> {
        if self.by_slug.contains_key(&article.slug) {
            warn!("Rejecting duplicate slug: {}", article.slug);
            return Err(Error::DuplicateSlug(article.slug));
        }

        debug!("Storing article {}", article.slug);
        self.by_slug.insert(article.slug.clone(), self.articles.len());
        self.articles.push(article);
        Ok(())
    }
}
