use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fabricated upload round-trip record, created once per generation call and
/// embedded into the final response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: String,
    pub file_url: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}
