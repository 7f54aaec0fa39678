//! Optional natural-language quality summary via a hosted
//! generative-text API (Gemini).
//!
//! This collaborator is strictly best-effort: any transport, HTTP, or
//! response-shape failure degrades to a fixed user-visible message and
//! never blocks or corrupts the rest of the display. The API key is an
//! explicit configuration value passed at construction; its absence is a
//! typed configuration error, not a call-time surprise.

use std::time::Duration;

use serde::Deserialize;

use crate::confidence::ConfidenceRecord;
use crate::error::ViewerError;
use crate::options::AnalysisOptions;

/// Fixed message shown when the service call fails for any reason.
pub const FALLBACK_MESSAGE: &str =
    "Failed to communicate with the Gemini API. Please check your API key.";

/// Fixed message shown when the service responds with no usable text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Could not generate analysis.";

/// Client for the generative-text analysis service.
pub struct AnalysisClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
    api_key: String,
}

impl AnalysisClient {
    /// Build a client from configuration. Fails with
    /// [`ViewerError::MissingApiKey`] when no key is configured.
    pub fn new(options: &AnalysisOptions) -> Result<Self, ViewerError> {
        let api_key = options
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ViewerError::MissingApiKey)?
            .to_owned();

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(options.timeout_secs)))
            .build();

        Ok(Self {
            agent: config.into(),
            endpoint: options.endpoint.trim_end_matches('/').to_owned(),
            model: options.model.clone(),
            api_key,
        })
    }

    /// Generate a quality summary for the merged metrics.
    ///
    /// Never fails: service errors are logged and replaced by
    /// [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn analyze(
        &self,
        metrics: &ConfidenceRecord,
        file_name: &str,
    ) -> String {
        let prompt = build_prompt(metrics, file_name);
        match self.generate(&prompt) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => EMPTY_RESPONSE_MESSAGE.to_owned(),
            Err(e) => {
                log::warn!("analysis request failed: {e}");
                FALLBACK_MESSAGE.to_owned()
            }
        }
    }

    fn generate(&self, prompt: &str) -> Result<String, ureq::Error> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.endpoint, self.model
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response: GenerateContentResponse = self
            .agent
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .send_json(&body)?
            .into_body()
            .read_json()?;

        Ok(response
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default())
    }
}

#[derive(Debug, Deserialize, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn fmt_score(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), |v| format!("{v:.2}"))
}

/// Build the analysis prompt from the merged metrics.
#[must_use]
pub fn build_prompt(metrics: &ConfidenceRecord, file_name: &str) -> String {
    let avg_plddt = fmt_score(metrics.mean_plddt());
    let seq_length = metrics
        .residue_count()
        .map_or_else(|| "N/A".to_owned(), |n| n.to_string());
    let disordered = metrics.fraction_disordered.map_or_else(
        || "N/A".to_owned(),
        |f| format!("{:.1}%", f * 100.0),
    );
    let clash = metrics.clash_detected().map_or_else(
        || "N/A".to_owned(),
        |c| if c { "Yes" } else { "No" }.to_owned(),
    );

    format!(
        "You are an expert structural biologist analyzing an AlphaFold 3 \
         prediction result.\n\
         \n\
         Filename: {file_name}\n\
         \n\
         Metrics provided:\n\
         - Average pLDDT: {avg_plddt} (0-100, higher is better)\n\
         - pTM Score: {ptm} (0-1, higher is better)\n\
         - ipTM Score: {iptm} (0-1, higher is better, relevant for \
         complexes)\n\
         - Ranking Score: {ranking}\n\
         - Fraction Disordered: {disordered}\n\
         - Has Clash: {clash}\n\
         - Sequence Length: {seq_length} residues\n\
         \n\
         Please provide a concise analysis of this structure's quality.\n\
         1. Interpret the confidence scores (pTM/ipTM).\n\
         2. If clashes are detected or fraction disordered is high, explain \
         the potential implications.\n\
         3. Explain what the pLDDT distribution likely implies about \
         disordered regions vs structured domains.\n\
         \n\
         Keep the tone professional but accessible. Maximum 200 words.",
        ptm = fmt_score(metrics.ptm),
        iptm = fmt_score(metrics.iptm),
        ranking = fmt_score(metrics.ranking_score),
    )
}
