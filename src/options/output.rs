use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output artifact options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputOptions {
    /// Directory the PNG and report artifacts are written into.
    pub directory: PathBuf,
    /// Nearest-neighbor upscale factor for the PAE heatmap. The raw image
    /// is one pixel per residue pair, which is tiny for short sequences.
    pub heatmap_scale: u32,
    /// Height of the heatmap color-scale legend strip in pixels.
    pub legend_height: u32,
    /// pLDDT chart width in pixels.
    pub chart_width: u32,
    /// pLDDT chart height in pixels.
    pub chart_height: u32,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            heatmap_scale: 4,
            legend_height: 16,
            chart_width: 900,
            chart_height: 480,
        }
    }
}
