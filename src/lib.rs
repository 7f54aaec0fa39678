// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Colormap math compares against exact breakpoints
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! Viewer and light analysis toolkit for AlphaFold 3 prediction outputs.
//!
//! Loads an mmCIF structure plus the confidence JSON files that ship with an
//! AlphaFold 3 prediction, merges the metric files into one typed
//! [`confidence::ConfidenceRecord`], and turns the result into inspectable
//! artifacts: a PAE heatmap image, a per-residue pLDDT chart, a plain-text
//! metric report, and (optionally) a natural-language quality summary from a
//! hosted generative-text API.
//!
//! # Key entry points
//!
//! - [`ingest::load_paths`] / [`ingest::merge_files`] - file ingestion and
//!   metric merging
//! - [`heatmap::render`] - PAE matrix to RGB image
//! - [`tier::ConfidenceTier`] - pLDDT confidence bucketing shared by the 3D
//!   coloring callback, the chart reference lines, and the report
//! - [`analysis::AnalysisClient`] - optional Gemini-backed summary
//! - [`options::Options`] - runtime configuration (output, analysis)
//!
//! The crate does not render 3D structures itself; an external molecular
//! viewer is injected through [`surface::StructureSurface`] and handed the
//! opaque mmCIF text together with a per-atom coloring callback.

pub mod analysis;
pub mod chart;
pub mod confidence;
pub mod error;
pub mod heatmap;
pub mod ingest;
pub mod options;
pub mod report;
pub mod surface;
pub mod tier;
