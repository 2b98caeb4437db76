//! JSONL-based storage implementation with in-memory caching.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::traits::{Filter, HasId, SortSpec, Storage, id_matches};
use crate::error::{CatalogError, Result};

/// JSONL-based storage with in-memory caching.
///
/// Each collection lives in `<base_path>/<collection>.jsonl`, one record per
/// line. Files are read once on first access; creates append a line, every
/// other write replaces the file through a temporary sibling.
pub struct JsonlStorage {
    base_path: PathBuf,
    cache: RwLock<HashMap<String, Vec<Value>>>,
}

impl std::fmt::Debug for JsonlStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlStorage")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

fn poisoned(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Storage(format!("cache lock poisoned: {}", e))
}

fn read_records(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut records = Vec::new();
    for line in BufReader::new(File::open(path)?).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

fn write_records(path: &Path, records: &[Value]) -> Result<()> {
    let staging = path.with_extension("jsonl.tmp");
    {
        let mut file = File::create(&staging)?;
        for record in records {
            writeln!(file, "{}", serde_json::to_string(record)?)?;
        }
        file.sync_all()?;
    }
    fs::rename(&staging, path)?;
    Ok(())
}

impl JsonlStorage {
    /// Open (and create if needed) a data directory.
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        log::debug!("Opened JSONL storage at {}", base_path.display());
        Ok(Self {
            base_path,
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.base_path.join(format!("{}.jsonl", collection))
    }

    fn ensure_loaded(&self, collection: &str) -> Result<()> {
        if self.cache.read().map_err(poisoned)?.contains_key(collection) {
            return Ok(());
        }

        let mut cache = self.cache.write().map_err(poisoned)?;
        if !cache.contains_key(collection) {
            let path = self.collection_path(collection);
            let records = read_records(&path)?;
            log::debug!("Loaded {} records from {}", records.len(), path.display());
            cache.insert(collection.to_string(), records);
        }
        Ok(())
    }

    /// Borrow a collection's records for reading.
    fn read_collection<R>(&self, collection: &str, read: impl FnOnce(&[Value]) -> Result<R>) -> Result<R> {
        self.ensure_loaded(collection)?;
        let cache = self.cache.read().map_err(poisoned)?;
        read(cache.get(collection).map(Vec::as_slice).unwrap_or_default())
    }

    /// Change a staged copy of a collection's records and rewrite its file.
    /// The cache only takes the new records once the file is written.
    fn write_collection(&self, collection: &str, change: impl FnOnce(&mut Vec<Value>) -> Result<()>) -> Result<()> {
        self.ensure_loaded(collection)?;
        let mut cache = self.cache.write().map_err(poisoned)?;
        let records = cache.entry(collection.to_string()).or_default();

        let mut staged = records.clone();
        change(&mut staged)?;
        write_records(&self.collection_path(collection), &staged)?;
        *records = staged;
        Ok(())
    }

    /// Apply `change` to the record with `id`.
    fn modify(&self, collection: &str, id: &str, change: impl FnOnce(&mut Value) -> Result<()>) -> Result<()> {
        self.write_collection(collection, |records| {
            let record = records
                .iter_mut()
                .find(|r| id_matches(r, id))
                .ok_or_else(|| CatalogError::NotFound(format!("{}/{}", collection, id)))?;
            change(record)
        })
    }
}

impl Storage for JsonlStorage {
    fn create<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, record: &T) -> Result<()> {
        let value = serde_json::to_value(record)?;
        self.ensure_loaded(collection)?;

        let mut cache = self.cache.write().map_err(poisoned)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.collection_path(collection))?;
        writeln!(file, "{}", serde_json::to_string(&value)?)?;
        cache.entry(collection.to_string()).or_default().push(value);

        log::debug!("Created {}/{}", collection, record.id());
        Ok(())
    }

    fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Result<Option<T>> {
        self.read_collection(collection, |records| {
            records
                .iter()
                .find(|r| id_matches(r, id))
                .map(|r| serde_json::from_value(r.clone()).map_err(CatalogError::from))
                .transpose()
        })
    }

    fn update<T: Serialize + DeserializeOwned + HasId>(&self, collection: &str, id: &str, record: &T) -> Result<()> {
        let value = serde_json::to_value(record)?;
        self.modify(collection, id, |r| {
            *r = value;
            Ok(())
        })?;
        log::debug!("Updated {}/{}", collection, id);
        Ok(())
    }

    fn patch(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        let fields = fields
            .as_object()
            .ok_or_else(|| CatalogError::Storage("patch fields must be a JSON object".to_string()))?;

        self.modify(collection, id, |r| {
            let target = r
                .as_object_mut()
                .ok_or_else(|| CatalogError::Storage(format!("record {}/{} is not an object", collection, id)))?;
            target.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
            Ok(())
        })?;
        log::debug!("Patched {}/{} ({} fields)", collection, id, fields.len());
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.write_collection(collection, |records| {
            let before = records.len();
            records.retain(|r| !id_matches(r, id));
            if records.len() == before {
                return Err(CatalogError::NotFound(format!("{}/{}", collection, id)));
            }
            Ok(())
        })?;
        log::debug!("Deleted {}/{}", collection, id);
        Ok(())
    }

    fn query_sorted<T: DeserializeOwned>(
        &self,
        collection: &str,
        filters: &[Filter],
        sort: Option<&SortSpec>,
        limit: Option<usize>,
    ) -> Result<Vec<T>> {
        self.read_collection(collection, |records| {
            let mut matched: Vec<&Value> = records.iter().filter(|r| filters.iter().all(|f| f.matches(r))).collect();
            if let Some(spec) = sort {
                matched.sort_by(|a, b| spec.compare(a, b));
            }
            matched
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|r| serde_json::from_value(r.clone()).map_err(CatalogError::from))
                .collect()
        })
    }
}
