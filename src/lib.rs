//! Toolshelf - a catalog of AI tools
//!
//! Browse, filter and compare AI tools, read the accompanying blog and sign
//! up for the newsletter. Records come from an external data source behind
//! the [`storage::Storage`] trait; the catalog logic itself is pure.

pub mod blog;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod id;
pub mod import;
pub mod storage;

pub use error::{CatalogError, Result};
