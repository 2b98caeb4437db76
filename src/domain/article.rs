//! Blog article records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de;

/// A blog article. The like count is owned by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    pub title: String,

    /// Short teaser, searched alongside the title
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub summary: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub content: String,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub author: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub likes: u64,
}

impl Article {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            content: String::new(),
            author: None,
            category: None,
            date: None,
            image_url: None,
            tags: Vec::new(),
            likes: 0,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_article() {
        let article: Article = serde_json::from_value(json!({"id": 3, "title": "Hello"})).unwrap();
        assert_eq!(article.id, "3");
        assert_eq!(article.likes, 0);
        assert_eq!(article.summary, "");
        assert!(article.date.is_none());
        assert!(article.tags.is_empty());
    }

    #[test]
    fn test_article_with_date_and_null_likes() {
        let article: Article = serde_json::from_value(json!({
            "id": "a1",
            "title": "Picking an image model",
            "summary": "A short guide",
            "author": "Editorial",
            "category": "guides",
            "date": "2025-03-14",
            "tags": ["image"],
            "likes": null
        }))
        .unwrap();
        assert_eq!(article.date, NaiveDate::from_ymd_opt(2025, 3, 14));
        assert_eq!(article.likes, 0);
        assert_eq!(article.author.as_deref(), Some("Editorial"));
    }

    #[test]
    fn test_builder() {
        let article = Article::new("1", "T").with_summary("S").with_category("news").with_likes(4);
        assert_eq!(article.summary, "S");
        assert_eq!(article.category.as_deref(), Some("news"));
        assert_eq!(article.likes, 4);
    }
}
