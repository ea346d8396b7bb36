//! Simulated upload round-trip.

use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use merchmock_core::models::UploadResponse;
use merchmock_core::GeneratorConfig;

/// Fakes the upload leg of the workflow: a fixed artificial latency, then a
/// fabricated response record. The latency is not proportional to data size.
///
/// File size is resolved by probing the local filesystem; a missing file
/// substitutes the configured fallback size. That substitution is a
/// deliberate stub, not an error path.
#[derive(Debug, Clone)]
pub struct UploadSimulator {
    delay: Duration,
    base_url: String,
    fallback_file_size: u64,
}

impl UploadSimulator {
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.upload_delay_ms),
            base_url: config.base_url.clone(),
            fallback_file_size: config.fallback_file_size_bytes,
        }
    }

    /// Suspend for the configured latency, then fabricate an upload record.
    pub async fn simulate(&self, image_file: &str) -> UploadResponse {
        tracing::info!(file = %image_file, "Simulating image upload");
        tokio::time::sleep(self.delay).await;

        let file_size = self.probe_file_size(image_file).await;
        let response = UploadResponse {
            success: true,
            file_id: format!("upload_{}", Uuid::new_v4()),
            file_url: format!("{}/uploads/{}", self.base_url, image_file),
            file_size,
            uploaded_at: Utc::now(),
        };
        tracing::info!(file_id = %response.file_id, file_size, "Image upload simulated");
        response
    }

    async fn probe_file_size(&self, filename: &str) -> u64 {
        match tokio::fs::metadata(filename).await {
            Ok(meta) => meta.len(),
            Err(_) => self.fallback_file_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn zero_delay_config() -> GeneratorConfig {
        GeneratorConfig {
            upload_delay_ms: 0,
            processing_delay_ms: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_uses_fallback_size() {
        let uploader = UploadSimulator::new(&zero_delay_config());
        let response = uploader.simulate("definitely_missing.jpg").await;
        assert!(response.success);
        assert_eq!(response.file_size, 153_600);
    }

    #[tokio::test]
    async fn test_existing_file_reports_real_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 42]).unwrap();
        file.flush().unwrap();

        let uploader = UploadSimulator::new(&zero_delay_config());
        let response = uploader
            .simulate(&file.path().to_string_lossy())
            .await;
        assert_eq!(response.file_size, 42);
    }

    #[tokio::test]
    async fn test_response_shape() {
        let uploader = UploadSimulator::new(&zero_delay_config());
        let response = uploader.simulate("design.png").await;
        assert!(response.file_id.starts_with("upload_"));
        assert_eq!(
            response.file_url,
            "https://mockapi.example.com/uploads/design.png"
        );
    }

    #[tokio::test]
    async fn test_file_ids_are_collision_free() {
        let uploader = UploadSimulator::new(&zero_delay_config());
        let a = uploader.simulate("a.jpg").await;
        let b = uploader.simulate("a.jpg").await;
        assert_ne!(a.file_id, b.file_id);
    }
}
