//! Article storage helpers and the reader's liked-article ledger.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::collections::{ARTICLES, LIKED_ARTICLES};
use super::traits::{HasId, Storage};
use crate::blog::next_like_count;
use crate::domain::Article;
use crate::error::{CatalogError, Result};

impl HasId for Article {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Result of toggling a like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeOutcome {
    /// Whether the reader now likes the article
    pub liked: bool,
    /// Like count written back to the data source
    pub likes: u64,
}

/// Typed access to the article collection.
pub struct ArticleStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ArticleStore<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Result<Vec<Article>> {
        self.storage.list(ARTICLES)
    }

    pub fn get(&self, id: &str) -> Result<Option<Article>> {
        self.storage.get(ARTICLES, id)
    }

    pub fn create(&self, article: &Article) -> Result<()> {
        if article.title.trim().is_empty() {
            return Err(CatalogError::InvalidRecord(format!("article {} has an empty title", article.id)));
        }
        if self.get(&article.id)?.is_some() {
            return Err(CatalogError::InvalidRecord(format!("article {} already exists", article.id)));
        }
        self.storage.create(ARTICLES, article)
    }

    /// Write a subset of fields.
    pub fn update(&self, id: &str, fields: &Value) -> Result<()> {
        self.storage.patch(ARTICLES, id, fields)
    }

    /// Flip the reader's like on an article and write the adjusted count.
    ///
    /// The count is read, adjusted and written back without any version
    /// check, so concurrent likers can overwrite each other's increments.
    /// The local flag is written first and restored if the count write
    /// fails, so the flag and the count stay in step.
    pub fn toggle_like(&self, id: &str, ledger: &LikedArticles<'_, S>) -> Result<LikeOutcome> {
        let article = self
            .get(id)?
            .ok_or_else(|| CatalogError::NotFound(format!("article {}", id)))?;

        let liked = !ledger.is_liked(id)?;
        let likes = next_like_count(article.likes, liked);

        ledger.set(id, liked)?;
        if let Err(e) = self.update(id, &json!({ "likes": likes })) {
            if let Err(restore) = ledger.set(id, !liked) {
                log::warn!("Failed to restore like flag for article {}: {}", id, restore);
            }
            return Err(e);
        }

        log::info!("Article {} {} ({} likes)", id, if liked { "liked" } else { "unliked" }, likes);
        Ok(LikeOutcome { liked, likes })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct LikedMarker {
    id: String,
}

impl HasId for LikedMarker {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The local reader's set of liked article ids.
pub struct LikedArticles<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> LikedArticles<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    pub fn is_liked(&self, article_id: &str) -> Result<bool> {
        Ok(self.storage.get::<LikedMarker>(LIKED_ARTICLES, article_id)?.is_some())
    }

    /// Liked ids, oldest first
    pub fn ids(&self) -> Result<Vec<String>> {
        let markers: Vec<LikedMarker> = self.storage.list(LIKED_ARTICLES)?;
        Ok(markers.into_iter().map(|m| m.id).collect())
    }

    /// Record or clear a like. Idempotent in both directions.
    pub fn set(&self, article_id: &str, liked: bool) -> Result<()> {
        match (liked, self.is_liked(article_id)?) {
            (true, false) => self.storage.create(
                LIKED_ARTICLES,
                &LikedMarker {
                    id: article_id.to_string(),
                },
            ),
            (false, true) => self.storage.delete(LIKED_ARTICLES, article_id),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonlStorage;
    use tempfile::TempDir;

    fn create_test_storage() -> (JsonlStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonlStorage::new(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_create_and_get_article() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);

        let article = Article::new("a1", "Hello").with_summary("First post");
        store.create(&article).unwrap();

        assert_eq!(store.get("a1").unwrap(), Some(article));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);
        assert!(store.create(&Article::new("a1", "")).is_err());
    }

    #[test]
    fn test_partial_update() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);
        store.create(&Article::new("a1", "Hello").with_summary("Old")).unwrap();

        store.update("a1", &json!({"summary": "New"})).unwrap();

        let article = store.get("a1").unwrap().unwrap();
        assert_eq!(article.summary, "New");
        assert_eq!(article.title, "Hello");
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);
        let ledger = LikedArticles::new(&storage);
        store.create(&Article::new("a1", "Hello").with_likes(2)).unwrap();

        let liked = store.toggle_like("a1", &ledger).unwrap();
        assert_eq!(liked, LikeOutcome { liked: true, likes: 3 });
        assert!(ledger.is_liked("a1").unwrap());
        assert_eq!(store.get("a1").unwrap().unwrap().likes, 3);

        let unliked = store.toggle_like("a1", &ledger).unwrap();
        assert_eq!(unliked, LikeOutcome { liked: false, likes: 2 });
        assert!(!ledger.is_liked("a1").unwrap());
        assert_eq!(store.get("a1").unwrap().unwrap().likes, 2);
    }

    #[test]
    fn test_toggle_like_restores_flag_when_count_write_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonlStorage::new(temp_dir.path()).unwrap();
        let store = ArticleStore::new(&storage);
        let ledger = LikedArticles::new(&storage);
        store.create(&Article::new("a1", "Hello").with_likes(2)).unwrap();

        let staging = temp_dir.path().join(format!("{}.jsonl.tmp", ARTICLES));
        std::fs::create_dir(&staging).unwrap();
        assert!(store.toggle_like("a1", &ledger).is_err());
        assert!(!ledger.is_liked("a1").unwrap());
        assert_eq!(store.get("a1").unwrap().unwrap().likes, 2);

        std::fs::remove_dir(&staging).unwrap();
        let outcome = store.toggle_like("a1", &ledger).unwrap();
        assert_eq!(outcome, LikeOutcome { liked: true, likes: 3 });
    }

    #[test]
    fn test_unlike_saturates_at_zero() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);
        let ledger = LikedArticles::new(&storage);
        store.create(&Article::new("a1", "Hello")).unwrap();
        ledger.set("a1", true).unwrap();

        let outcome = store.toggle_like("a1", &ledger).unwrap();
        assert_eq!(outcome, LikeOutcome { liked: false, likes: 0 });
    }

    #[test]
    fn test_toggle_like_missing_article() {
        let (storage, _temp) = create_test_storage();
        let store = ArticleStore::new(&storage);
        let ledger = LikedArticles::new(&storage);
        let result = store.toggle_like("nope", &ledger);
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert!(ledger.ids().unwrap().is_empty());
    }

    #[test]
    fn test_ledger_set_is_idempotent() {
        let (storage, _temp) = create_test_storage();
        let ledger = LikedArticles::new(&storage);

        ledger.set("a1", true).unwrap();
        ledger.set("a1", true).unwrap();
        ledger.set("a2", true).unwrap();
        assert_eq!(ledger.ids().unwrap(), vec!["a1", "a2"]);

        ledger.set("a1", false).unwrap();
        ledger.set("a1", false).unwrap();
        assert_eq!(ledger.ids().unwrap(), vec!["a2"]);
    }
}
