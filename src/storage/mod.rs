//! Storage layer for Toolshelf.
//!
//! The catalog treats its data source as an external service. `Storage`
//! is the seam: the typed stores below are written against the trait, and
//! `JsonlStorage` is the local implementation used by the binary and tests.

mod articles;
mod jsonl;
mod newsletter;
mod tools;
mod traits;

pub use articles::{ArticleStore, LikeOutcome, LikedArticles};
pub use jsonl::JsonlStorage;
pub use newsletter::{NewsletterStore, is_valid_email};
pub use tools::ToolStore;
pub use traits::{Filter, FilterOp, HasId, SortSpec, Storage, id_matches};

/// Collection names
pub mod collections {
    pub const TOOLS: &str = "ai_tools";
    pub const ARTICLES: &str = "articles";
    pub const LIKED_ARTICLES: &str = "liked_articles";
    pub const NEWSLETTER: &str = "newsletter";
}
