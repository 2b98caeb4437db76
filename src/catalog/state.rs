//! Catalog session state.
//!
//! `CatalogState` bundles everything a catalog view session owns: the
//! current filters, the comparison selection and which view is active.
//! Every operation returns a new state, so callers hold one value and
//! replace it on each user intent instead of mutating shared globals.

use crate::domain::ToolRecord;

use super::criteria::{Facet, FilterCriteria, filter};
use super::group::{CategorySection, group_by_category, sections};
use super::selection::SelectionSet;

/// Which catalog view is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Per-category sections with a short preview each
    #[default]
    Sections,
    /// Flat list of filter results
    Results,
}

/// Derived data for the active view
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    Sections(Vec<CategorySection>),
    Results(Vec<ToolRecord>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    criteria: FilterCriteria,
    selection: SelectionSet,
    view: ActiveView,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state for a catalog entered with an optional category
    /// parameter (e.g. from a "see all" link).
    pub fn from_category_param(category: Option<&str>) -> Self {
        let facet = Facet::from_option(category);
        let view = if facet.is_all() { ActiveView::Sections } else { ActiveView::Results };
        Self {
            criteria: FilterCriteria::new().with_category(facet),
            selection: SelectionSet::new(),
            view,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn active_view(&self) -> ActiveView {
        self.view
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_constrained()
    }

    /// Update the search text. A non-empty term always switches to results;
    /// clearing it returns to sections only when no facet is set.
    pub fn with_search(&self, term: impl Into<String>) -> Self {
        let criteria = self.criteria.clone().with_search(term);
        let view = if !criteria.search_term.is_empty() {
            ActiveView::Results
        } else if criteria.category.is_all() && criteria.pricing_type.is_all() {
            ActiveView::Sections
        } else {
            self.view
        };
        Self {
            criteria,
            selection: self.selection.clone(),
            view,
        }
    }

    pub fn with_category(&self, category: Facet) -> Self {
        self.with_criteria(self.criteria.clone().with_category(category))
    }

    pub fn with_pricing(&self, pricing_type: Facet) -> Self {
        self.with_criteria(self.criteria.clone().with_pricing(pricing_type))
    }

    fn with_criteria(&self, criteria: FilterCriteria) -> Self {
        let view = if criteria.is_constrained() { ActiveView::Results } else { ActiveView::Sections };
        Self {
            criteria,
            selection: self.selection.clone(),
            view,
        }
    }

    /// Clear all filters; the selection survives.
    pub fn reset_filters(&self) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            selection: self.selection.clone(),
            view: ActiveView::Sections,
        }
    }

    /// Leave a single-category listing for the sections view.
    pub fn back_to_all_categories(&self) -> Self {
        Self {
            criteria: self.criteria.clone().with_category(Facet::All),
            selection: self.selection.clone(),
            view: ActiveView::Sections,
        }
    }

    pub fn toggle(&self, tool: &ToolRecord) -> Self {
        Self {
            criteria: self.criteria.clone(),
            selection: self.selection.toggled(tool),
            view: self.view,
        }
    }

    pub fn clear_selection(&self) -> Self {
        Self {
            criteria: self.criteria.clone(),
            selection: SelectionSet::new(),
            view: self.view,
        }
    }

    /// Derive the active view over a snapshot of `tools`.
    pub fn view(&self, tools: &[ToolRecord], preview: usize) -> CatalogView {
        match self.view {
            ActiveView::Sections => CatalogView::Sections(sections(group_by_category(tools), preview)),
            ActiveView::Results => CatalogView::Results(filter(tools, &self.criteria)),
        }
    }
}
