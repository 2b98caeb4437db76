//! AI tool records and facet vocabularies

use serde::{Deserialize, Serialize};

use super::de;

/// An AI tool as supplied by the data source.
///
/// Only `id` and `name` are required on the wire; everything else falls back
/// to an empty/zero value so that partially-populated records never break
/// filtering or comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    /// Stable identifier (strings and numbers are both accepted)
    #[serde(deserialize_with = "de::id")]
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text description, searched alongside the name
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "de::non_empty")]
    pub pricing_type: Option<String>,

    /// 0..=5
    #[serde(default, deserialize_with = "de::rating")]
    pub rating: f64,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub features: Vec<String>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub pros: Vec<String>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub cons: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_details: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ToolRecord {
    /// Create a tool with only identity fields populated
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: None,
            pricing_type: None,
            rating: 0.0,
            features: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            pricing_details: None,
            website_url: None,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_pricing(mut self, pricing_type: impl Into<String>) -> Self {
        self.pricing_type = Some(pricing_type.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = de::clamp_rating(rating);
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pros<I, S>(mut self, pros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pros = pros.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cons<I, S>(mut self, cons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cons = cons.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the tool lists this exact feature label
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Whole stars for display (rating rounded down)
    pub fn stars(&self) -> u8 {
        self.rating.floor() as u8
    }
}

/// Known tool categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    Image,
    Audio,
    Video,
    DataAnalysis,
    Translation,
    Chatbot,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Text,
        Self::Image,
        Self::Audio,
        Self::Video,
        Self::DataAnalysis,
        Self::Translation,
        Self::Chatbot,
        Self::Other,
    ];

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "image" | "images" => Some(Self::Image),
            "audio" => Some(Self::Audio),
            "video" => Some(Self::Video),
            "data_analysis" | "data-analysis" => Some(Self::DataAnalysis),
            "translation" => Some(Self::Translation),
            "chatbot" => Some(Self::Chatbot),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Canonical stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::DataAnalysis => "data_analysis",
            Self::Translation => "translation",
            Self::Chatbot => "chatbot",
            Self::Other => "other",
        }
    }
}

/// Known pricing models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingType {
    Free,
    Paid,
    FreeTrial,
}

impl PricingType {
    pub const ALL: [PricingType; 3] = [Self::Free, Self::Paid, Self::FreeTrial];

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "paid" => Some(Self::Paid),
            "free_trial" | "free-trial" => Some(Self::FreeTrial),
            _ => None,
        }
    }

    /// Canonical stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Paid => "paid",
            Self::FreeTrial => "free_trial",
        }
    }
}

/// Display form of a stored facet value: underscores become spaces.
pub fn format_label(value: &str) -> String {
    value.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_record_deserializes() {
        let tool: ToolRecord = serde_json::from_value(json!({"id": 1, "name": "Writer"})).unwrap();
        assert_eq!(tool.id, "1");
        assert_eq!(tool.name, "Writer");
        assert_eq!(tool.description, "");
        assert_eq!(tool.rating, 0.0);
        assert!(tool.features.is_empty());
        assert!(tool.pros.is_empty());
        assert!(tool.cons.is_empty());
        assert!(tool.category.is_none());
    }

    #[test]
    fn test_full_record_deserializes() {
        let tool: ToolRecord = serde_json::from_value(json!({
            "id": "w1",
            "name": "Writer",
            "description": "Drafts essays",
            "category": "text",
            "pricing_type": "free",
            "rating": 4,
            "features": ["Draft", "Edit"],
            "pros": ["Fast"],
            "cons": null,
            "website_url": "https://writer.example"
        }))
        .unwrap();
        assert_eq!(tool.category.as_deref(), Some("text"));
        assert_eq!(tool.pricing_type.as_deref(), Some("free"));
        assert_eq!(tool.rating, 4.0);
        assert_eq!(tool.features, vec!["Draft", "Edit"]);
        assert!(tool.cons.is_empty());
        assert_eq!(tool.website_url.as_deref(), Some("https://writer.example"));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<ToolRecord>(json!({"id": "1"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let tool = ToolRecord::new("1", "Writer")
            .with_category("text")
            .with_pricing("free")
            .with_rating(7.0)
            .with_features(["Draft"]);
        assert_eq!(tool.rating, 5.0);
        assert!(tool.has_feature("Draft"));
        assert!(!tool.has_feature("draft"));
    }

    #[test]
    fn test_stars() {
        assert_eq!(ToolRecord::new("1", "a").with_rating(4.7).stars(), 4);
        assert_eq!(ToolRecord::new("1", "a").stars(), 0);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("text"), Some(Category::Text));
        assert_eq!(Category::from_str("Data-Analysis"), Some(Category::DataAnalysis));
        assert_eq!(Category::from_str("robots"), None);
    }

    #[test]
    fn test_category_round_trip_str() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_pricing_from_str() {
        assert_eq!(PricingType::from_str("free-trial"), Some(PricingType::FreeTrial));
        assert_eq!(PricingType::from_str("PAID"), Some(PricingType::Paid));
        assert_eq!(PricingType::from_str("subscription"), None);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("data_analysis"), "data analysis");
        assert_eq!(format_label("text"), "text");
    }
}
