//! Tool-specific storage helpers.

use super::collections::TOOLS;
use super::traits::{Filter, HasId, SortSpec, Storage};
use crate::catalog::Facet;
use crate::domain::ToolRecord;
use crate::error::{CatalogError, Result};

impl HasId for ToolRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Typed access to the tool collection.
pub struct ToolStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> ToolStore<'a, S> {
    /// Create a new ToolStore wrapping the given storage.
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// All tools, in data-source order.
    pub fn list(&self) -> Result<Vec<ToolRecord>> {
        self.storage.list(TOOLS)
    }

    /// Get a tool by ID.
    pub fn get(&self, id: &str) -> Result<Option<ToolRecord>> {
        self.storage.get(TOOLS, id)
    }

    /// Fetch several tools, silently dropping ids that do not resolve.
    pub fn get_many(&self, ids: &[String]) -> Result<Vec<ToolRecord>> {
        let mut tools = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get(id)? {
                Some(tool) => tools.push(tool),
                None => log::warn!("Tool {} not found, skipping", id),
            }
        }
        Ok(tools)
    }

    /// Tools listing this exact feature label, in data-source order.
    pub fn with_feature(&self, feature: &str) -> Result<Vec<ToolRecord>> {
        self.storage.query(TOOLS, &[Filter::contains("features", feature)])
    }

    /// Highest-rated tools of a category, best first. `all` is not a
    /// category and is rejected.
    pub fn top_rated(&self, category: &str, limit: usize) -> Result<Vec<ToolRecord>> {
        if Facet::parse(category).is_all() {
            return Err(CatalogError::InvalidQuery(format!(
                "top rated tools need a specific category, got '{}'",
                category
            )));
        }
        self.storage.query_sorted(
            TOOLS,
            &[Filter::eq("category", category)],
            Some(&SortSpec::desc("rating")),
            Some(limit),
        )
    }

    /// Add a tool. Names must be non-empty and ids unique.
    pub fn create(&self, tool: &ToolRecord) -> Result<()> {
        if tool.name.trim().is_empty() {
            return Err(CatalogError::InvalidRecord(format!("tool {} has an empty name", tool.id)));
        }
        if self.get(&tool.id)?.is_some() {
            return Err(CatalogError::InvalidRecord(format!("tool {} already exists", tool.id)));
        }
        self.storage.create(TOOLS, tool)
    }

    /// Replace an existing tool.
    pub fn update(&self, tool: &ToolRecord) -> Result<()> {
        self.storage.update(TOOLS, &tool.id, tool)
    }
}
