//! Grouping tools into per-category sections.

use crate::domain::ToolRecord;

/// Tools sharing one category, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub tools: Vec<ToolRecord>,
}

/// Category → tools mapping, ordered by first appearance of each category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryGroups {
    groups: Vec<CategoryGroup>,
}

impl CategoryGroups {
    /// Tools in `category`, if any tool carries it
    pub fn get(&self, category: &str) -> Option<&[ToolRecord]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.tools.as_slice())
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.category.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for CategoryGroups {
    type Item = CategoryGroup;
    type IntoIter = std::vec::IntoIter<CategoryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group tools by category. Tools without a category are skipped and no
/// sorting is applied within a group.
pub fn group_by_category(tools: &[ToolRecord]) -> CategoryGroups {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for tool in tools {
        let Some(category) = tool.category.as_deref() else {
            continue;
        };
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.tools.push(tool.clone()),
            None => groups.push(CategoryGroup {
                category: category.to_string(),
                tools: vec![tool.clone()],
            }),
        }
    }
    CategoryGroups { groups }
}

/// Stable sort by rating, highest first.
pub fn sort_by_rating(tools: &[ToolRecord]) -> Vec<ToolRecord> {
    let mut sorted = tools.to_vec();
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted
}

/// A category section as shown on the catalog landing view
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: String,
    /// The first few tools of the group
    pub preview: Vec<ToolRecord>,
    /// Size of the whole group
    pub total: usize,
}

impl CategorySection {
    /// More tools exist than the preview shows
    pub fn has_more(&self) -> bool {
        self.total > self.preview.len()
    }
}

/// Truncate each group to `preview` tools.
pub fn sections(groups: CategoryGroups, preview: usize) -> Vec<CategorySection> {
    groups
        .into_iter()
        .map(|group| {
            let total = group.tools.len();
            let preview = group.tools.into_iter().take(preview).collect();
            CategorySection {
                category: group.category,
                preview,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("1", "a").with_category("text").with_rating(3.0),
            ToolRecord::new("2", "b").with_category("image").with_rating(5.0),
            ToolRecord::new("3", "c"),
            ToolRecord::new("4", "d").with_category("text").with_rating(4.5),
            ToolRecord::new("5", "e").with_category("text").with_rating(1.0),
            ToolRecord::new("6", "f").with_category("text").with_rating(4.5),
        ]
    }

    fn ids(tools: &[ToolRecord]) -> Vec<&str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_group_skips_uncategorized() {
        let groups = group_by_category(&tools());
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.tools.iter().all(|t| t.id != "3")));
    }

    #[test]
    fn test_group_order_first_seen() {
        let groups = group_by_category(&tools());
        assert_eq!(groups.categories(), vec!["text", "image"]);
    }

    #[test]
    fn test_group_preserves_input_order() {
        let groups = group_by_category(&tools());
        assert_eq!(ids(groups.get("text").unwrap()), vec!["1", "4", "5", "6"]);
        assert_eq!(ids(groups.get("image").unwrap()), vec!["2"]);
        assert!(groups.get("audio").is_none());
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let sorted = sort_by_rating(&tools());
        assert_eq!(ids(&sorted), vec!["2", "4", "6", "1", "5", "3"]);
    }

    #[test]
    fn test_top_n_via_sort_then_group() {
        let groups = group_by_category(&sort_by_rating(&tools()));
        let top: Vec<&str> = ids(groups.get("text").unwrap()).into_iter().take(2).collect();
        assert_eq!(top, vec!["4", "6"]);
    }

    #[test]
    fn test_sections_truncate() {
        let sections = sections(group_by_category(&tools()), 3);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].category, "text");
        assert_eq!(ids(&sections[0].preview), vec!["1", "4", "5"]);
        assert_eq!(sections[0].total, 4);
        assert!(sections[0].has_more());
        assert!(!sections[1].has_more());
    }
}
