use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::template::{Dimensions, ProductType, Template};
use super::upload::UploadResponse;

/// Printful-style API response, the durable artifact of a generation call.
/// Constructed once, serialized to `mockup_data_<id>.json`, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockupResponse {
    pub code: u16,
    pub result: MockupResult,
    pub extra: MockupExtra,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockupResult {
    pub product_id: String,
    pub variant_id: String,
    pub mockup_url: String,
    pub mockup_file: String,
    pub product_type: ProductType,
    pub template_info: Template,
    pub placement: Placement,
    pub upload_info: UploadResponse,
    pub processing_time: String,
    pub generated_at: DateTime<Utc>,
}

/// Overlay area flattened into placement coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub area_width: u32,
    pub area_height: u32,
    pub top: u32,
    pub left: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockupExtra {
    pub print_area: String,
    pub recommended_dpi: u32,
    pub supported_formats: Vec<String>,
}

/// Projection of `result` for console summaries. Derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockupSummary {
    pub product_id: String,
    pub mockup_file: String,
    pub product_type: ProductType,
    pub dimensions: Dimensions,
    pub generated_at: DateTime<Utc>,
}

impl MockupResponse {
    /// Extract the five summary fields from `result`.
    pub fn summarize(&self) -> MockupSummary {
        MockupSummary {
            product_id: self.result.product_id.clone(),
            mockup_file: self.result.mockup_file.clone(),
            product_type: self.result.product_type,
            dimensions: self.result.template_info.dimensions,
            generated_at: self.result.generated_at,
        }
    }
}
