//! Baked-in template registry.
//!
//! The registry is fixed configuration: three canvas templates keyed by
//! product type, constructed once at startup and injected by reference into
//! the generator. No insertion or removal is exposed.

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{Dimensions, OverlayArea, ProductType, Template};

/// Immutable mapping from product type to canvas template.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: HashMap<ProductType, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            ProductType::Tshirt,
            Template {
                name: "T-Shirt Mockup".to_string(),
                dimensions: Dimensions {
                    width: 800,
                    height: 600,
                },
                overlay_area: OverlayArea {
                    x: 200,
                    y: 150,
                    width: 400,
                    height: 300,
                },
            },
        );
        templates.insert(
            ProductType::Mug,
            Template {
                name: "Coffee Mug Mockup".to_string(),
                dimensions: Dimensions {
                    width: 600,
                    height: 600,
                },
                overlay_area: OverlayArea {
                    x: 150,
                    y: 200,
                    width: 300,
                    height: 200,
                },
            },
        );
        templates.insert(
            ProductType::PhoneCase,
            Template {
                name: "Phone Case Mockup".to_string(),
                dimensions: Dimensions {
                    width: 400,
                    height: 800,
                },
                overlay_area: OverlayArea {
                    x: 50,
                    y: 100,
                    width: 300,
                    height: 600,
                },
            },
        );
        Self { templates }
    }

    /// Look up the template for a product type.
    ///
    /// The classifier only emits registered keys, so a miss means the
    /// registry and classifier have drifted apart; that surfaces as a
    /// configuration error rather than undefined behavior.
    pub fn get(&self, product_type: ProductType) -> Result<&Template, AppError> {
        self.templates.get(&product_type).ok_or_else(|| {
            AppError::Configuration(format!(
                "No template registered for product type '{}'",
                product_type
            ))
        })
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
