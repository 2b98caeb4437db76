//! Tool catalog filtering, selection and comparison.
//!
//! Everything here is pure and synchronous: each call takes a snapshot of
//! the tools plus the current criteria or selection and returns a new
//! derived value. Nothing in this module fails; absent fields were already
//! defaulted when the records were deserialized.

pub mod compare;
pub mod criteria;
pub mod group;
pub mod selection;
pub mod state;

pub use compare::{ComparisonTable, FeatureRow, parse_compare_ids, union_features};
pub use criteria::{Facet, FilterCriteria, filter};
pub use group::{CategoryGroup, CategoryGroups, CategorySection, group_by_category, sections, sort_by_rating};
pub use selection::{MAX_SELECTION, SelectionSet, is_selected, toggle_selection};
pub use state::{ActiveView, CatalogState, CatalogView};
