//! Domain types for Toolshelf
//!
//! This module contains the records supplied by the data source:
//! - ToolRecord: An AI tool in the catalog
//! - Article: A blog post with an externally persisted like count
//! - Subscription: A newsletter signup
//!
//! Records arriving from the data source may be partially populated. All
//! defaulting happens here, during deserialization, so the catalog and blog
//! logic can assume fully-populated values.

pub mod article;
pub mod subscription;
pub mod tool;

pub use article::Article;
pub use subscription::Subscription;
pub use tool::{Category, PricingType, ToolRecord, format_label};

/// Deserializers that substitute defaults for absent or malformed fields.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    /// Accept a JSON string or number as a record id.
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        })
    }

    /// Treat `null` the same as an absent field.
    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Empty or whitespace-only strings become `None`.
    pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
    }

    /// Ratings are clamped to 0..=5; null and non-finite values become 0.
    pub fn rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
        Ok(clamp_rating(raw))
    }

    pub fn clamp_rating(raw: f64) -> f64 {
        if raw.is_finite() { raw.clamp(0.0, 5.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::de;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "de::id")]
        id: String,
        #[serde(default, deserialize_with = "de::null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "de::non_empty")]
        category: Option<String>,
        #[serde(default, deserialize_with = "de::rating")]
        rating: f64,
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let probe: Probe = serde_json::from_value(json!({"id": 7})).unwrap();
        assert_eq!(probe.id, "7");
    }

    #[test]
    fn test_string_id_kept() {
        let probe: Probe = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(probe.id, "abc");
    }

    #[test]
    fn test_absent_fields_default() {
        let probe: Probe = serde_json::from_value(json!({"id": "1"})).unwrap();
        assert!(probe.tags.is_empty());
        assert!(probe.category.is_none());
        assert_eq!(probe.rating, 0.0);
    }

    #[test]
    fn test_null_fields_default() {
        let probe: Probe =
            serde_json::from_value(json!({"id": "1", "tags": null, "category": null, "rating": null})).unwrap();
        assert!(probe.tags.is_empty());
        assert!(probe.category.is_none());
        assert_eq!(probe.rating, 0.0);
    }

    #[test]
    fn test_empty_category_is_none() {
        let probe: Probe = serde_json::from_value(json!({"id": "1", "category": "  "})).unwrap();
        assert!(probe.category.is_none());
    }

    #[test]
    fn test_rating_clamped() {
        let high: Probe = serde_json::from_value(json!({"id": "1", "rating": 9.5})).unwrap();
        let low: Probe = serde_json::from_value(json!({"id": "1", "rating": -2})).unwrap();
        assert_eq!(high.rating, 5.0);
        assert_eq!(low.rating, 0.0);
    }

    #[test]
    fn test_clamp_rating_non_finite() {
        assert_eq!(de::clamp_rating(f64::NAN), 0.0);
        assert_eq!(de::clamp_rating(f64::INFINITY), 0.0);
        assert_eq!(de::clamp_rating(3.5), 3.5);
    }
}
