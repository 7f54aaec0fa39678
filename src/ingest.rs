//! File ingestion and metric merging.
//!
//! A prediction upload is a loose set of files: exactly one mmCIF structure
//! (`.cif`, first one wins if several are given) and any number of metric
//! JSON files. Metric files are merged field by field in input order, later
//! files overwriting earlier ones on collision. Users commonly upload
//! mismatched sets, so a malformed metric file is skipped with a warning
//! while a missing or unreadable structure file aborts the whole call —
//! without a structure there is nothing to visualize.

use std::path::{Path, PathBuf};

use crate::confidence::ConfidenceRecord;
use crate::error::ViewerError;

/// Placeholder display name when neither the structure nor any metric
/// filename yields one.
pub const UNKNOWN_NAME: &str = "Unknown Structure";

/// One fully loaded prediction, produced fresh on every ingestion call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPrediction {
    /// Opaque mmCIF text. The core never interprets it; it is handed to
    /// the injected 3D surface as-is.
    pub cif: String,
    /// Merged confidence record, or `None` when no metric file parsed
    /// successfully.
    pub confidences: Option<ConfidenceRecord>,
    /// Display name derived from the input filenames.
    pub name: String,
}

/// Merge an in-memory set of `(filename, bytes)` uploads into a
/// [`LoadedPrediction`].
///
/// Filenames are classified by suffix, case-insensitively; anything that is
/// neither `.cif` nor `.json` is ignored.
pub fn merge_files(
    files: &[(String, Vec<u8>)],
) -> Result<LoadedPrediction, ViewerError> {
    merge_impl(files.iter().map(|(name, bytes)| {
        (name.as_str(), Ok::<&[u8], ViewerError>(bytes.as_slice()))
    }))
}

/// Read the given paths from disk and merge them.
///
/// Reads happen sequentially in argument order, which is also the merge
/// order: the first `.cif` wins and later metric files overwrite earlier
/// ones per field. A read failure on a metric file is treated like a parse
/// failure (skipped with a warning); a read failure on the selected
/// structure file is fatal.
pub fn load_paths(paths: &[PathBuf]) -> Result<LoadedPrediction, ViewerError> {
    let contents: Vec<(String, Result<Vec<u8>, ViewerError>)> = paths
        .iter()
        .map(|path| {
            let name = file_name_of(path);
            let bytes = std::fs::read(path).map_err(|e| {
                ViewerError::StructureRead(format!(
                    "{}: {e}",
                    path.display()
                ))
            });
            (name, bytes)
        })
        .collect();

    merge_impl(
        contents
            .iter()
            .map(|(name, bytes)| (name.as_str(), result_as_slice(bytes))),
    )
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map_or_else(
            || path.to_string_lossy(),
            std::ffi::OsStr::to_string_lossy,
        )
        .into_owned()
}

fn result_as_slice<'a>(
    bytes: &'a Result<Vec<u8>, ViewerError>,
) -> Result<&'a [u8], ViewerError> {
    match bytes {
        Ok(b) => Ok(b.as_slice()),
        Err(ViewerError::StructureRead(msg)) => {
            Err(ViewerError::StructureRead(msg.clone()))
        }
        Err(e) => Err(ViewerError::StructureRead(e.to_string())),
    }
}

fn merge_impl<'a, I>(files: I) -> Result<LoadedPrediction, ViewerError>
where
    I: Iterator<Item = (&'a str, Result<&'a [u8], ViewerError>)>,
{
    let mut cif: Option<String> = None;
    let mut structure_name = String::new();
    let mut metric_name = String::new();
    let mut merged = ConfidenceRecord::default();
    let mut parsed_any = false;

    for (name, bytes) in files {
        if has_suffix(name, ".cif") {
            if cif.is_some() {
                // Only one canonical structure exists per prediction, so
                // the first candidate wins.
                log::debug!("ignoring extra structure file {name}");
                continue;
            }
            let bytes = bytes?;
            let text = String::from_utf8(bytes.to_vec()).map_err(|e| {
                ViewerError::StructureRead(format!("{name}: {e}"))
            })?;
            structure_name = structure_base_name(name);
            cif = Some(text);
        } else if has_suffix(name, ".json") {
            let Ok(bytes) = bytes else {
                log::warn!("skipping unreadable metric file {name}");
                continue;
            };
            match serde_json::from_slice::<ConfidenceRecord>(bytes) {
                Ok(record) => {
                    merged.merge_from(record);
                    parsed_any = true;
                    if metric_name.is_empty() {
                        metric_name = metric_base_name(name);
                    }
                }
                Err(e) => {
                    log::warn!("skipping malformed metric file {name}: {e}");
                }
            }
        } else {
            log::debug!("ignoring unrecognized file {name}");
        }
    }

    let Some(cif) = cif else {
        return Err(ViewerError::StructureMissing);
    };

    let confidences = parsed_any.then(|| validated(merged));
    // Structure-derived name wins regardless of input order; metric-file
    // names are a fallback, the placeholder a last resort.
    let name = [structure_name, metric_name]
        .into_iter()
        .find(|n| !n.is_empty())
        .unwrap_or_else(|| UNKNOWN_NAME.to_owned());

    Ok(LoadedPrediction {
        cif,
        confidences,
        name,
    })
}

/// Drop a ragged PAE matrix (it cannot be rendered as a square image) and
/// flag a dimension mismatch against the pLDDT array.
fn validated(mut record: ConfidenceRecord) -> ConfidenceRecord {
    if !record.pae_is_square() {
        log::warn!("dropping non-square PAE matrix from merged metrics");
        record.pae = None;
    }
    if let (Some(pae), Some(residues)) =
        (record.pae.as_deref(), record.residue_count())
    {
        if pae.len() != residues {
            log::warn!(
                "PAE dimension {} does not match residue count {residues}",
                pae.len()
            );
        }
    }
    record
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    // `get` keeps this safe for names where the byte offset would split a
    // multi-byte character (such names cannot match an ASCII suffix anyway).
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

fn strip_suffix_ci<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    has_suffix(name, suffix).then(|| &name[..name.len() - suffix.len()])
}

/// Base name from a structure filename: `foo_model.cif` and `foo.cif`
/// both become `foo`.
fn structure_base_name(name: &str) -> String {
    strip_suffix_ci(name, "_model.cif")
        .or_else(|| strip_suffix_ci(name, ".cif"))
        .unwrap_or(name)
        .to_owned()
}

/// Base name from a metric filename, trying the most specific suffix
/// first: `foo_summary_confidences.json`, `foo_confidences.json`, and
/// `foo.json` all become `foo`.
fn metric_base_name(name: &str) -> String {
    strip_suffix_ci(name, "_summary_confidences.json")
        .or_else(|| strip_suffix_ci(name, "_confidences.json"))
        .or_else(|| strip_suffix_ci(name, ".json"))
        .unwrap_or(name)
        .to_owned()
}
