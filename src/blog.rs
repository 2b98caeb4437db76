//! Article listing helpers for the blog.

use crate::catalog::Facet;
use crate::catalog::criteria::text_matches;
use crate::domain::Article;

/// Blog search filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleCriteria {
    pub search_term: String,
    pub category: Facet,
}

impl ArticleCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: Facet) -> Self {
        self.category = category;
        self
    }
}

/// Articles whose title or summary contains the search term
/// (case-insensitive) and whose category passes the facet, in input order.
pub fn filter_articles(articles: &[Article], criteria: &ArticleCriteria) -> Vec<Article> {
    let needle = criteria.search_term.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            text_matches(&needle, &[a.title.as_str(), a.summary.as_str()])
                && criteria.category.matches(a.category.as_deref())
        })
        .cloned()
        .collect()
}

/// Distinct article categories in first-seen order
pub fn article_categories(articles: &[Article]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in articles.iter().filter_map(|a| a.category.as_deref()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// Like count after the reader likes (`liked = true`) or unlikes an article.
/// Unliking never goes below zero.
pub fn next_like_count(current: u64, liked: bool) -> u64 {
    if liked { current.saturating_add(1) } else { current.saturating_sub(1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn articles() -> Vec<Article> {
        vec![
            Article::new("1", "Choosing a chatbot")
                .with_summary("What to look for")
                .with_category("guides"),
            Article::new("2", "Weekly roundup")
                .with_summary("New image models this week")
                .with_category("news"),
            Article::new("3", "Prompting images").with_category("guides"),
            Article::new("4", "Untagged musings"),
        ]
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_unconstrained_returns_all() {
        let all = articles();
        assert_eq!(filter_articles(&all, &ArticleCriteria::new()), all);
    }

    #[test]
    fn test_search_title_and_summary() {
        let criteria = ArticleCriteria::new().with_search("IMAGE");
        assert_eq!(ids(&filter_articles(&articles(), &criteria)), vec!["2", "3"]);
    }

    #[test]
    fn test_category_filter() {
        let criteria = ArticleCriteria::new().with_category(Facet::parse("guides"));
        assert_eq!(ids(&filter_articles(&articles(), &criteria)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_and_category() {
        let criteria = ArticleCriteria::new()
            .with_search("image")
            .with_category(Facet::parse("news"));
        assert_eq!(ids(&filter_articles(&articles(), &criteria)), vec!["2"]);
    }

    #[test]
    fn test_article_categories() {
        assert_eq!(article_categories(&articles()), vec!["guides", "news"]);
        assert!(article_categories(&[]).is_empty());
    }

    #[test]
    fn test_next_like_count() {
        assert_eq!(next_like_count(0, true), 1);
        assert_eq!(next_like_count(5, false), 4);
        assert_eq!(next_like_count(0, false), 0);
    }
}
