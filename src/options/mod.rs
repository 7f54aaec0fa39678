//! Runtime configuration with TOML file support.
//!
//! All tweakable settings (artifact output, analysis service) are
//! consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so partial files (e.g. only overriding
//! `[analysis]`) work correctly.

mod analysis;
mod output;

use std::path::Path;

pub use analysis::AnalysisOptions;
pub use output::OutputOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Output artifact options.
    pub output: OutputOptions,
    /// Text-generation analysis service options.
    pub analysis: AnalysisOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path).map_err(ViewerError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewerError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewerError::Io)
    }
}
