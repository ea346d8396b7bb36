//! Rule-based product type classification from free-text metadata.

use crate::models::ProductType;

/// Infer a product type from a title and tags.
///
/// Case-insensitive substring match on the title, exact match on tags.
/// The mug rule is checked before the case rule; first match wins, and
/// anything unmatched falls back to `Tshirt`. Pure function, never fails.
pub fn classify(title: &str, tags: &[String]) -> ProductType {
    let title = title.to_lowercase();
    let tags: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    if title.contains("mug") || tags.iter().any(|t| t == "coffee" || t == "mug") {
        ProductType::Mug
    } else if title.contains("case") || tags.iter().any(|t| t == "phone case") {
        ProductType::PhoneCase
    } else {
        ProductType::Tshirt
    }
}
