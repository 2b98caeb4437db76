//! Search and facet filtering of tool records.

use crate::domain::ToolRecord;

/// Constraint on a single filterable dimension (category, pricing type).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    /// No constraint
    #[default]
    All,
    /// Field must equal this value exactly
    Only(String),
}

impl Facet {
    /// Parse a user-supplied facet value. `"all"` and the empty string mean
    /// no constraint; anything else is taken literally, so an unknown value
    /// simply matches nothing.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(trimmed.to_string())
        }
    }

    /// Convert an optional CLI/query argument
    pub fn from_option(value: Option<&str>) -> Self {
        value.map(Self::parse).unwrap_or_default()
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The constrained value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Check a record field against this facet. Absent fields only pass `All`.
    pub fn matches(&self, field: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(v) => field == Some(v.as_str()),
        }
    }
}

/// The full set of catalog filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text; empty means no text constraint
    pub search_term: String,
    pub category: Facet,
    pub pricing_type: Facet,
}

impl FilterCriteria {
    /// Criteria that match every tool
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

    pub fn with_pricing(mut self, pricing_type: Facet) -> Self {
        self.pricing_type = pricing_type;
        self
    }

    /// True when at least one of the three constraints is active
    pub fn is_constrained(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_all() || !self.pricing_type.is_all()
    }

    /// Check a single tool against all three constraints
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        let needle = self.search_term.to_lowercase();
        self.matches_with_needle(tool, &needle)
    }

    fn matches_with_needle(&self, tool: &ToolRecord, needle: &str) -> bool {
        text_matches(needle, &[tool.name.as_str(), tool.description.as_str()])
            && self.category.matches(tool.category.as_deref())
            && self.pricing_type.matches(tool.pricing_type.as_deref())
    }
}

/// Case-insensitive substring test against any of `fields`.
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub(crate) fn text_matches(needle: &str, fields: &[&str]) -> bool {
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(needle))
}

/// Return the tools satisfying `criteria`, in their original order.
pub fn filter(tools: &[ToolRecord], criteria: &FilterCriteria) -> Vec<ToolRecord> {
    let needle = criteria.search_term.to_lowercase();
    tools
        .iter()
        .filter(|tool| criteria.matches_with_needle(tool, &needle))
        .cloned()
        .collect()
}
