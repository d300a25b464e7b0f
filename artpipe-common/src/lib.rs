//! # artpipe common library
//!
//! Shared code for the artpipe command-line tools:
//! - Article model and slug derivation
//! - Normalization of loosely-typed records into articles
//! - Slug-deduplicating merge
//! - Atomic JSON persistence
//! - In-memory repository
//! - Pipeline helpers (filter, limit, sort, summary)
//! - Configuration loading

pub mod article;
pub mod config;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod repository;
pub mod seed;
pub mod slug;
pub mod store;

pub use article::{Article, RawRecord};
pub use error::{Error, Result};
pub use normalize::{normalize, NormalizeMode};
pub use slug::slugify;
