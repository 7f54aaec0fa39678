use serde::{Deserialize, Serialize};

/// Text-generation analysis service options.
///
/// The credential lives here so the client receives it explicitly at
/// construction; nothing in the crate reads it from the process
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisOptions {
    /// API key for the hosted service. `None` disables analysis.
    pub api_key: Option<String>,
    /// Model identifier passed to the service.
    pub model: String,
    /// Base URL of the generative-language endpoint.
    pub endpoint: String,
    /// Global request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_owned(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta"
                .to_owned(),
            timeout_secs: 30,
        }
    }
}
