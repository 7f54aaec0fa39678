//! Typed confidence record merged from AlphaFold 3 metric files.
//!
//! A prediction ships its metrics across several JSON files (full
//! `*_confidences.json` with the PAE matrix and per-residue pLDDT, plus
//! `*_summary_confidences.json` with the scalar scores). All fields are
//! optional; [`ConfidenceRecord::merge_from`] combines partially-overlapping
//! files field by field. Unrecognized JSON keys are ignored by
//! construction, so nothing outside this schema propagates downstream.

use serde::{Deserialize, Serialize};

/// Indicator values above this threshold count as a detected clash. The
/// source format emits a probability-like scalar here, not a strict
/// boolean.
pub const CLASH_THRESHOLD: f64 = 0.5;

/// The union of confidence metrics that may appear across the metric files
/// of one prediction. Field names match the JSON keys AlphaFold 3 writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceRecord {
    /// Predicted aligned error matrix (square, one row per residue,
    /// distance units).
    pub pae: Option<Vec<Vec<f64>>>,
    /// Per-residue pLDDT in [0, 100], insertion order = residue order.
    pub plddt: Option<Vec<f64>>,
    /// Predicted template modeling score in [0, 1].
    pub ptm: Option<f64>,
    /// Interface predicted template modeling score in [0, 1].
    pub iptm: Option<f64>,
    /// Model ranking score in [0, 1].
    pub ranking_score: Option<f64>,
    /// Fraction of residues predicted disordered, in [0, 1].
    pub fraction_disordered: Option<f64>,
    /// Clash indicator; interpret through [`ConfidenceRecord::clash_detected`].
    pub has_clash: Option<f64>,
    /// Per-chain interface TM scores.
    pub chain_iptm: Option<Vec<f64>>,
    /// Per-chain TM scores.
    pub chain_ptm: Option<Vec<f64>>,
    /// Chain-pair interface TM score matrix.
    pub chain_pair_iptm: Option<Vec<Vec<f64>>>,
    /// Chain-pair minimum PAE matrix.
    pub chain_pair_pae_min: Option<Vec<Vec<f64>>>,
}

impl ConfidenceRecord {
    /// Shallow-merge `later` into `self`: every field `later` carries
    /// overwrites the corresponding field here, fields it omits are left
    /// untouched. Flat union, not a deep merge.
    pub fn merge_from(&mut self, later: Self) {
        merge_field(&mut self.pae, later.pae);
        merge_field(&mut self.plddt, later.plddt);
        merge_field(&mut self.ptm, later.ptm);
        merge_field(&mut self.iptm, later.iptm);
        merge_field(&mut self.ranking_score, later.ranking_score);
        merge_field(&mut self.fraction_disordered, later.fraction_disordered);
        merge_field(&mut self.has_clash, later.has_clash);
        merge_field(&mut self.chain_iptm, later.chain_iptm);
        merge_field(&mut self.chain_ptm, later.chain_ptm);
        merge_field(&mut self.chain_pair_iptm, later.chain_pair_iptm);
        merge_field(&mut self.chain_pair_pae_min, later.chain_pair_pae_min);
    }

    /// Whether the clash indicator crosses [`CLASH_THRESHOLD`]. `None` when
    /// the metric is absent.
    #[must_use]
    pub fn clash_detected(&self) -> Option<bool> {
        self.has_clash.map(|v| v > CLASH_THRESHOLD)
    }

    /// Mean pLDDT over all residues. `None` when pLDDT is absent or empty.
    #[must_use]
    pub fn mean_plddt(&self) -> Option<f64> {
        match self.plddt.as_deref() {
            Some(scores) if !scores.is_empty() => {
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            }
            _ => None,
        }
    }

    /// Residue count implied by the pLDDT array.
    #[must_use]
    pub fn residue_count(&self) -> Option<usize> {
        self.plddt.as_deref().map(<[f64]>::len)
    }

    /// Whether the PAE matrix (if present) is square. A record without a
    /// PAE matrix counts as valid.
    #[must_use]
    pub fn pae_is_square(&self) -> bool {
        self.pae.as_deref().is_none_or(|m| {
            let n = m.len();
            m.iter().all(|row| row.len() == n)
        })
    }
}

fn merge_field<T>(earlier: &mut Option<T>, later: Option<T>) {
    if later.is_some() {
        *earlier = later;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_confidences_json() {
        let json = r#"{
            "pae": [[0.5, 10.0], [10.0, 0.5]],
            "plddt": [95.0, 60.0],
            "atom_plddts": [95.0, 94.0, 60.0],
            "atom_chain_ids": ["A", "A", "A"]
        }"#;
        let record: ConfidenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pae.as_ref().unwrap().len(), 2);
        assert_eq!(record.plddt, Some(vec![95.0, 60.0]));
        // Unknown keys are dropped, scalar scores stay absent.
        assert_eq!(record.ptm, None);
    }

    #[test]
    fn parses_summary_confidences_json() {
        let json = r#"{
            "ptm": 0.85,
            "iptm": 0.79,
            "ranking_score": 0.82,
            "fraction_disordered": 0.05,
            "has_clash": 0.0,
            "chain_iptm": [0.8, 0.78],
            "chain_pair_iptm": [[0.8, 0.7], [0.7, 0.78]]
        }"#;
        let record: ConfidenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.ptm, Some(0.85));
        assert_eq!(record.clash_detected(), Some(false));
        assert_eq!(record.chain_iptm.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn merge_later_wins_per_field() {
        let mut a = ConfidenceRecord {
            ptm: Some(0.5),
            iptm: Some(0.4),
            ..Default::default()
        };
        let b = ConfidenceRecord {
            ptm: Some(0.9),
            ..Default::default()
        };
        a.merge_from(b);
        // b redefines ptm, a keeps iptm.
        assert_eq!(a.ptm, Some(0.9));
        assert_eq!(a.iptm, Some(0.4));
    }

    #[test]
    fn merge_is_idempotent() {
        let record = ConfidenceRecord {
            plddt: Some(vec![90.0, 80.0]),
            ptm: Some(0.7),
            ..Default::default()
        };
        let mut once = ConfidenceRecord::default();
        once.merge_from(record.clone());
        let mut twice = once.clone();
        twice.merge_from(record);
        assert_eq!(once, twice);
    }

    #[test]
    fn merge_disjoint_keys_unions() {
        let mut a = ConfidenceRecord {
            plddt: Some(vec![90.0]),
            ..Default::default()
        };
        let b = ConfidenceRecord {
            ptm: Some(0.7),
            ..Default::default()
        };
        a.merge_from(b);
        assert_eq!(a.plddt, Some(vec![90.0]));
        assert_eq!(a.ptm, Some(0.7));
    }

    #[test]
    fn clash_threshold_is_strict_greater_than() {
        let at = ConfidenceRecord {
            has_clash: Some(0.5),
            ..Default::default()
        };
        let above = ConfidenceRecord {
            has_clash: Some(0.6),
            ..Default::default()
        };
        let absent = ConfidenceRecord::default();
        assert_eq!(at.clash_detected(), Some(false));
        assert_eq!(above.clash_detected(), Some(true));
        assert_eq!(absent.clash_detected(), None);
    }

    #[test]
    fn mean_plddt_handles_absent_and_empty() {
        let some = ConfidenceRecord {
            plddt: Some(vec![90.0, 70.0]),
            ..Default::default()
        };
        let empty = ConfidenceRecord {
            plddt: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(some.mean_plddt(), Some(80.0));
        assert_eq!(empty.mean_plddt(), None);
        assert_eq!(ConfidenceRecord::default().mean_plddt(), None);
    }

    #[test]
    fn squareness_check() {
        let square = ConfidenceRecord {
            pae: Some(vec![vec![0.0, 1.0], vec![1.0, 0.0]]),
            ..Default::default()
        };
        let ragged = ConfidenceRecord {
            pae: Some(vec![vec![0.0, 1.0], vec![1.0]]),
            ..Default::default()
        };
        assert!(square.pae_is_square());
        assert!(!ragged.pae_is_square());
        assert!(ConfidenceRecord::default().pae_is_square());
    }
}
