//! Feature union and comparison table construction.

use std::collections::HashSet;

use crate::domain::ToolRecord;

/// Distinct feature labels across `tools`, in first-seen order.
///
/// Comparison is exact and case-sensitive.
pub fn union_features(tools: &[ToolRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut features = Vec::new();
    for tool in tools {
        for feature in &tool.features {
            if seen.insert(feature.as_str()) {
                features.push(feature.clone());
            }
        }
    }
    features
}

/// Parse a comma-separated id list (`"1,2,3"`).
///
/// Blank entries and repeated ids are dropped; the first occurrence wins.
pub fn parse_compare_ids(query: &str) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for raw in query.split(',') {
        let id = raw.trim();
        if !id.is_empty() && !ids.iter().any(|existing| existing == id) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// One feature row: which of the compared tools list the feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub feature: String,
    pub present: Vec<bool>,
}

/// Column-per-tool comparison of a set of tools.
///
/// Every per-tool vector has one entry per column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub names: Vec<String>,
    pub categories: Vec<Option<String>>,
    pub ratings: Vec<f64>,
    pub pricing: Vec<Option<String>>,
    pub features: Vec<FeatureRow>,
    pub pros_counts: Vec<usize>,
    pub cons_counts: Vec<usize>,
}

impl ComparisonTable {
    /// Build the table for `tools`, one column each
    pub fn build(tools: &[ToolRecord]) -> Self {
        let features = union_features(tools)
            .into_iter()
            .map(|feature| {
                let present = tools.iter().map(|t| t.has_feature(&feature)).collect();
                FeatureRow { feature, present }
            })
            .collect();

        Self {
            names: tools.iter().map(|t| t.name.clone()).collect(),
            categories: tools.iter().map(|t| t.category.clone()).collect(),
            ratings: tools.iter().map(|t| t.rating).collect(),
            pricing: tools.iter().map(|t| t.pricing_type.clone()).collect(),
            features,
            pros_counts: tools.iter().map(|t| t.pros.len()).collect(),
            cons_counts: tools.iter().map(|t| t.cons.len()).collect(),
        }
    }

    pub fn columns(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("1", "Writer")
                .with_category("text")
                .with_pricing("free")
                .with_rating(4.0)
                .with_features(["Draft", "Edit"])
                .with_pros(["Fast", "Cheap"]),
            ToolRecord::new("2", "Painter")
                .with_category("image")
                .with_pricing("paid")
                .with_rating(5.0)
                .with_features(["Edit", "Upscale"])
                .with_cons(["Slow"]),
        ]
    }

    #[test]
    fn test_union_of_nothing() {
        assert!(union_features(&[]).is_empty());
    }

    #[test]
    fn test_union_without_features() {
        let tools = vec![ToolRecord::new("1", "a"), ToolRecord::new("2", "b")];
        assert!(union_features(&tools).is_empty());
    }

    #[test]
    fn test_union_first_seen_order() {
        let tools = vec![
            ToolRecord::new("1", "a").with_features(["A", "B"]),
            ToolRecord::new("2", "b").with_features(["B", "C"]),
        ];
        assert_eq!(union_features(&tools), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_union_scenario() {
        assert_eq!(union_features(&scenario()), vec!["Draft", "Edit", "Upscale"]);
    }

    #[test]
    fn test_union_is_case_sensitive() {
        let tools = vec![ToolRecord::new("1", "a").with_features(["edit", "Edit", "edit"])];
        assert_eq!(union_features(&tools), vec!["edit", "Edit"]);
    }

    #[test]
    fn test_parse_compare_ids() {
        assert_eq!(parse_compare_ids("1,2,3"), vec!["1", "2", "3"]);
        assert_eq!(parse_compare_ids(" a , ,b,a "), vec!["a", "b"]);
        assert!(parse_compare_ids("").is_empty());
        assert!(parse_compare_ids(",,").is_empty());
    }

    #[test]
    fn test_table_shape() {
        let table = ComparisonTable::build(&scenario());
        assert_eq!(table.columns(), 2);
        assert_eq!(table.names, vec!["Writer", "Painter"]);
        assert_eq!(table.ratings, vec![4.0, 5.0]);
        assert_eq!(table.pricing, vec![Some("free".to_string()), Some("paid".to_string())]);
        assert_eq!(table.pros_counts, vec![2, 0]);
        assert_eq!(table.cons_counts, vec![0, 1]);
    }

    #[test]
    fn test_table_feature_rows() {
        let table = ComparisonTable::build(&scenario());
        let rows: Vec<(&str, &[bool])> = table
            .features
            .iter()
            .map(|r| (r.feature.as_str(), r.present.as_slice()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Draft", &[true, false][..]),
                ("Edit", &[true, true][..]),
                ("Upscale", &[false, true][..]),
            ]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = ComparisonTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.features.is_empty());
    }
}
