use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product description supplied by the caller (read-only input).
///
/// Only `id`, `title`, `tags`, and `image_file` are required; the optional
/// fields are what the product content generator writes into its packages,
/// and unknown fields in the input document are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    pub image_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document_parses() {
        let product: ProductData = serde_json::from_str(
            r#"{"id":"p1","title":"Coffee Mug","tags":["coffee"],"image_file":"missing.jpg"}"#,
        )
        .unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.tags, vec!["coffee"]);
        assert!(product.price.is_none());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result =
            serde_json::from_str::<ProductData>(r#"{"id":"p1","title":"Coffee Mug","tags":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let product: ProductData = serde_json::from_str(
            r#"{"id":"p1","title":"Tee","tags":[],"image_file":"a.jpg","publisher":"java"}"#,
        )
        .unwrap();
        assert_eq!(product.title, "Tee");
    }
}
