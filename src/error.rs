//! Crate-level error types.

use std::fmt;

/// Errors produced by the af3view crate.
///
/// Only structure-related failures are fatal to an ingestion attempt;
/// malformed metric files and analysis-service failures are recovered
/// locally and never surface here.
#[derive(Debug)]
pub enum ViewerError {
    /// No `.cif` file was found among the ingested inputs.
    StructureMissing,
    /// A `.cif` candidate was found but could not be read.
    StructureRead(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to encode or write an image artifact.
    Image(image::ImageError),
    /// Failed to render the pLDDT chart.
    Chart(String),
    /// The analysis API key is not configured.
    MissingApiKey,
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructureMissing => write!(
                f,
                "no .cif file found: upload at least a model.cif file to \
                 visualize the structure"
            ),
            Self::StructureRead(msg) => {
                write!(f, "failed to read the .cif file: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Image(e) => write!(f, "image output error: {e}"),
            Self::Chart(msg) => write!(f, "chart render error: {msg}"),
            Self::MissingApiKey => write!(
                f,
                "analysis API key is not configured: set it in the options \
                 file or pass --api-key"
            ),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for ViewerError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
