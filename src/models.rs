use serde::{Deserialize, Serialize};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub prompt: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl AnalysisRequest {
    /// The language tag, or `None` when absent or blank.
    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Successful analysis, returned as-is to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub original: String,
    pub suggested: String,
    pub explanation: String,
}
