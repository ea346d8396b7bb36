//! End-to-end demo pipeline: product content generation → mockup generation.
//!
//! The publishing leg of the original workflow needs a live server and is out
//! of scope; the pipeline stops after the mockup artifact is written.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merchmock_core::error::AppError;
use merchmock_core::models::{MockupResponse, ProductData};
use merchmock_core::GeneratorConfig;

use crate::generator::MockupGenerator;
use crate::product::ProductContentGenerator;

/// Durable record of one pipeline run, written to
/// `pipeline_result_<id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub success: bool,
    pub execution_time: f64,
    pub product_data: ProductData,
    pub mockup_data: MockupResponse,
    pub completed_at: DateTime<Utc>,
}

/// Run product generation then mockup generation, persisting each step's
/// artifact plus the combined pipeline result.
pub async fn run_pipeline(theme: &str, config: GeneratorConfig) -> Result<PipelineResult, AppError> {
    tracing::info!(theme = %theme, "Starting pipeline");
    let started = Instant::now();

    let product_generator = ProductContentGenerator::new(config.output_dir.clone());
    let product = product_generator.generate(theme);
    product_generator.write_package(&product).await?;

    let mockup_generator = MockupGenerator::new(config.clone());
    let mockup = mockup_generator.generate(&product).await?;

    let result = PipelineResult {
        success: true,
        execution_time: started.elapsed().as_secs_f64(),
        product_data: product,
        mockup_data: mockup,
        completed_at: Utc::now(),
    };

    let path = config
        .output_dir
        .join(format!("pipeline_result_{}.json", result.product_data.id));
    let json = serde_json::to_vec_pretty(&result)?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| AppError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(
        product_id = %result.product_data.id,
        execution_time = result.execution_time,
        path = %path.display(),
        "Pipeline completed"
    );
    Ok(result)
}
