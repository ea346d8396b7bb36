//! Configuration module
//!
//! Settings for the generation pipeline: artificial delay durations, output
//! directory, and the fabricated API base URL. Defaults reproduce the stub's
//! original timings; tests inject zero delays for determinism.

use std::env;
use std::path::PathBuf;

const UPLOAD_DELAY_MS: u64 = 1000;
const PROCESSING_DELAY_MS: u64 = 1500;
const FALLBACK_FILE_SIZE_BYTES: u64 = 153_600;
const BASE_URL: &str = "https://mockapi.example.com";

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Artificial latency for the simulated upload round-trip.
    pub upload_delay_ms: u64,
    /// Artificial latency for the simulated overlay processing phase.
    pub processing_delay_ms: u64,
    /// Directory where JSON artifacts are written.
    pub output_dir: PathBuf,
    /// Base URL embedded in fabricated upload and mockup URLs.
    pub base_url: String,
    /// Size substituted when the referenced image file cannot be probed.
    pub fallback_file_size_bytes: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            upload_delay_ms: UPLOAD_DELAY_MS,
            processing_delay_ms: PROCESSING_DELAY_MS,
            output_dir: PathBuf::from("."),
            base_url: BASE_URL.to_string(),
            fallback_file_size_bytes: FALLBACK_FILE_SIZE_BYTES,
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Self {
            upload_delay_ms: env::var("MOCKUP_UPLOAD_DELAY_MS")
                .unwrap_or_else(|_| UPLOAD_DELAY_MS.to_string())
                .parse()
                .unwrap_or(UPLOAD_DELAY_MS),
            processing_delay_ms: env::var("MOCKUP_PROCESSING_DELAY_MS")
                .unwrap_or_else(|_| PROCESSING_DELAY_MS.to_string())
                .parse()
                .unwrap_or(PROCESSING_DELAY_MS),
            output_dir: env::var("MOCKUP_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            base_url: env::var("MOCKUP_BASE_URL").unwrap_or_else(|_| BASE_URL.to_string()),
            fallback_file_size_bytes: env::var("FALLBACK_FILE_SIZE_BYTES")
                .unwrap_or_else(|_| FALLBACK_FILE_SIZE_BYTES.to_string())
                .parse()
                .unwrap_or(FALLBACK_FILE_SIZE_BYTES),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("MOCKUP_BASE_URL must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_timings() {
        let config = GeneratorConfig::default();
        assert_eq!(config.upload_delay_ms, 1000);
        assert_eq!(config.processing_delay_ms, 1500);
        assert_eq!(config.fallback_file_size_bytes, 153_600);
        assert_eq!(config.base_url, "https://mockapi.example.com");
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = GeneratorConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
