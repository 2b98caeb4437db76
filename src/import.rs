//! Bulk import of tools and articles from a YAML (or JSON) document.
//!
//! ```yaml
//! tools:
//!   - name: Writer
//!     category: text
//!     features: [Draft, Edit]
//! articles:
//!   - id: welcome
//!     title: Welcome
//! ```
//!
//! Tools without an `id` get a generated one. Records the stores reject
//! (empty names, duplicate ids) are skipped and reported.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Article, ToolRecord};
use crate::error::{CatalogError, Result};
use crate::id::generate_tool_id;
use crate::storage::{ArticleStore, Storage, ToolStore};

#[derive(Debug, Default, Deserialize)]
struct RawDocument {
    #[serde(default)]
    tools: Vec<Value>,
    #[serde(default)]
    articles: Vec<Value>,
}

/// Parsed import document
#[derive(Debug, Default)]
pub struct ImportDocument {
    pub tools: Vec<ToolRecord>,
    pub articles: Vec<Article>,
}

/// What an import wrote
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub tools_created: usize,
    pub articles_created: usize,
    /// One message per rejected record
    pub skipped: Vec<String>,
}

/// Parse an import document.
pub fn parse_document(content: &str) -> Result<ImportDocument> {
    let raw: RawDocument = serde_yaml::from_str(content)?;

    let tools = raw
        .tools
        .into_iter()
        .map(|mut value| {
            if let Value::Object(map) = &mut value {
                if !map.contains_key("id") {
                    let name = map.get("name").and_then(Value::as_str).unwrap_or_default();
                    map.insert("id".to_string(), Value::String(generate_tool_id(name)));
                }
            }
            serde_json::from_value(value).map_err(CatalogError::from)
        })
        .collect::<Result<Vec<ToolRecord>>>()?;

    let articles = raw
        .articles
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(CatalogError::from))
        .collect::<Result<Vec<Article>>>()?;

    Ok(ImportDocument { tools, articles })
}

/// Write a parsed document through the stores.
pub fn import_document<S: Storage>(storage: &S, document: ImportDocument) -> Result<ImportSummary> {
    let tool_store = ToolStore::new(storage);
    let article_store = ArticleStore::new(storage);
    let mut summary = ImportSummary::default();

    for tool in &document.tools {
        match tool_store.create(tool) {
            Ok(()) => summary.tools_created += 1,
            Err(CatalogError::InvalidRecord(reason)) => {
                log::warn!("Skipping tool: {}", reason);
                summary.skipped.push(reason);
            }
            Err(e) => return Err(e),
        }
    }

    for article in &document.articles {
        match article_store.create(article) {
            Ok(()) => summary.articles_created += 1,
            Err(CatalogError::InvalidRecord(reason)) => {
                log::warn!("Skipping article: {}", reason);
                summary.skipped.push(reason);
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "Imported {} tools and {} articles ({} skipped)",
        summary.tools_created,
        summary.articles_created,
        summary.skipped.len()
    );
    Ok(summary)
}

/// Read, parse and import a document file.
pub fn import_file<S: Storage>(storage: &S, path: impl AsRef<Path>) -> Result<ImportSummary> {
    let content = std::fs::read_to_string(path.as_ref())?;
    import_document(storage, parse_document(&content)?)
}
