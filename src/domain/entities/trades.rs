use serde::{Deserialize, Serialize};

/// Result of previewing pasted trade rows before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradePreview {
    pub rows: usize,
    pub symbols: Vec<String>,
    pub issues: Vec<String>,
}

/// Result of a CSV upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub rows_imported: usize,
    pub skipped: usize,
}

/// Acknowledgement for submitted trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub accepted: usize,
}
