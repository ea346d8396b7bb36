//! Mockup generation pipeline: classify → upload → process → persist.
//!
//! The phases are strictly linear; there is no branching, retry, or
//! cancellation point once a generation starts. Concurrent generations are
//! safe for distinct product ids; two calls with the same id race on the
//! output artifact with last-write-wins semantics.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;

use merchmock_core::classifier::classify;
use merchmock_core::error::AppError;
use merchmock_core::models::{
    MockupExtra, MockupResponse, MockupResult, Placement, ProductData,
};
use merchmock_core::{GeneratorConfig, TemplateRegistry};

use crate::upload::UploadSimulator;

/// Orchestrates one mockup generation call end to end.
pub struct MockupGenerator {
    registry: TemplateRegistry,
    uploader: UploadSimulator,
    processing_delay: Duration,
    output_dir: PathBuf,
    base_url: String,
}

impl MockupGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            registry: TemplateRegistry::new(),
            uploader: UploadSimulator::new(&config),
            processing_delay: Duration::from_millis(config.processing_delay_ms),
            output_dir: config.output_dir,
            base_url: config.base_url,
        }
    }

    /// Run the four ordered phases and persist the artifact.
    ///
    /// Errors from the persist phase propagate to the caller; the single
    /// recovery boundary lives in [`process_product_mockup`].
    pub async fn generate(&self, product: &ProductData) -> Result<MockupResponse, AppError> {
        tracing::info!(product_id = %product.id, title = %product.title, "Starting mockup generation");

        let product_type = classify(&product.title, &product.tags);
        let template = self.registry.get(product_type)?;
        tracing::info!(
            product_type = %product_type,
            template = %template.name,
            width = template.dimensions.width,
            height = template.dimensions.height,
            "Template selected"
        );

        let upload_info = self.uploader.simulate(&product.image_file).await;

        tracing::info!("Processing mockup overlay");
        tokio::time::sleep(self.processing_delay).await;

        let mockup_file = format!("mockup_{}.jpg", product.id);
        let response = MockupResponse {
            code: 200,
            result: MockupResult {
                product_id: product.id.clone(),
                variant_id: format!("{}_{}", product.id, product_type),
                mockup_url: format!("{}/mockups/{}", self.base_url, mockup_file),
                mockup_file: mockup_file.clone(),
                product_type,
                template_info: template.clone(),
                placement: Placement {
                    area_width: template.overlay_area.width,
                    area_height: template.overlay_area.height,
                    top: template.overlay_area.y,
                    left: template.overlay_area.x,
                },
                upload_info,
                processing_time: "2.5 seconds".to_string(),
                generated_at: Utc::now(),
            },
            extra: MockupExtra {
                print_area: format!(
                    "{}x{}px",
                    template.overlay_area.width, template.overlay_area.height
                ),
                recommended_dpi: 300,
                supported_formats: vec![
                    "JPG".to_string(),
                    "PNG".to_string(),
                    "PDF".to_string(),
                ],
            },
        };

        let path = self.persist(&response).await?;
        tracing::info!(path = %path.display(), "Mockup data saved");
        Ok(response)
    }

    /// Write the artifact as pretty-printed JSON, overwriting unconditionally.
    async fn persist(&self, response: &MockupResponse) -> Result<PathBuf, AppError> {
        let path = self
            .output_dir
            .join(format!("mockup_data_{}.json", response.result.product_id));
        let json = serde_json::to_vec_pretty(response)?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| AppError::WriteFailed {
                path: path.display().to_string(),
                source,
            })?;
        Ok(path)
    }
}

/// Entry point with the single coarse recovery boundary: read input →
/// generate → summarize. Any failure at any stage is logged once and
/// collapses to `None`; no partial result is returned.
pub async fn process_product_mockup(
    path: &Path,
    config: GeneratorConfig,
) -> Option<MockupResponse> {
    match try_process(path, config).await {
        Ok(response) => Some(response),
        Err(err) => {
            tracing::error!(error = %err, error_type = %err.error_type(), "Error processing mockup");
            None
        }
    }
}

async fn try_process(path: &Path, config: GeneratorConfig) -> Result<MockupResponse, AppError> {
    tracing::info!(path = %path.display(), "Loading product data");
    let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::InputNotFound(path.display().to_string())
        } else {
            AppError::from(err)
        }
    })?;
    let product: ProductData = serde_json::from_str(&raw)?;

    let generator = MockupGenerator::new(config);
    let response = generator.generate(&product).await?;

    let summary = response.summarize();
    tracing::info!(
        product = %product.title,
        product_type = %summary.product_type,
        width = summary.dimensions.width,
        height = summary.dimensions.height,
        file = %summary.mockup_file,
        "Mockup summary"
    );
    Ok(response)
}
