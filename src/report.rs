//! Plain-text metric report.
//!
//! Mirrors the summary cards of the viewer: scalar scores, disorder
//! percentage, clash verdict, plus a per-tier residue breakdown. Absent
//! metrics render as an explicit "-" placeholder rather than being
//! silently omitted.

use std::fmt::Write as _;

use crate::confidence::ConfidenceRecord;
use crate::tier::ConfidenceTier;

fn scalar(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"))
}

/// Render the report for one prediction.
#[must_use]
pub fn summarize(record: &ConfidenceRecord, name: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Prediction: {name}");
    let _ = writeln!(out);

    let _ = writeln!(out, "pTM:                 {}", scalar(record.ptm));
    let _ = writeln!(out, "ipTM:                {}", scalar(record.iptm));
    let _ = writeln!(
        out,
        "Ranking score:       {}",
        scalar(record.ranking_score)
    );
    let disorder = record.fraction_disordered.map_or_else(
        || "-".to_owned(),
        |f| format!("{:.0}%", f * 100.0),
    );
    let _ = writeln!(out, "Fraction disordered: {disorder}");
    let clash = record.clash_detected().map_or("-", |c| {
        if c {
            "Yes"
        } else {
            "No"
        }
    });
    let _ = writeln!(out, "Has clash:           {clash}");

    match record.plddt.as_deref() {
        Some(scores) if !scores.is_empty() => {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Residues: {} (mean pLDDT {})",
                scores.len(),
                scalar(record.mean_plddt())
            );
            for tier in ConfidenceTier::ALL {
                let count = scores
                    .iter()
                    .filter(|&&s| ConfidenceTier::classify(s) == tier)
                    .count();
                let percent = 100.0 * count as f64 / scores.len() as f64;
                let _ = writeln!(
                    out,
                    "  {:<9} {count:>5}  ({percent:.1}%)",
                    tier.label()
                );
            }
        }
        _ => {
            let _ = writeln!(out);
            let _ = writeln!(out, "pLDDT data not found.");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_present_metrics_and_tier_breakdown() {
        let record = ConfidenceRecord {
            plddt: Some(vec![95.0, 91.0, 75.0, 45.0]),
            ptm: Some(0.85),
            iptm: Some(0.8),
            ranking_score: Some(0.83),
            fraction_disordered: Some(0.1),
            has_clash: Some(0.0),
            ..Default::default()
        };
        let report = summarize(&record, "pred");
        assert!(report.contains("Prediction: pred"));
        assert!(report.contains("pTM:                 0.85"));
        assert!(report.contains("Fraction disordered: 10%"));
        assert!(report.contains("Has clash:           No"));
        assert!(report.contains("Residues: 4 (mean pLDDT 76.50)"));
        assert!(report.contains("Very High     2  (50.0%)"));
        assert!(report.contains("Very Low      1  (25.0%)"));
    }

    #[test]
    fn absent_metrics_render_placeholders() {
        let report = summarize(&ConfidenceRecord::default(), "x");
        assert!(report.contains("pTM:                 -"));
        assert!(report.contains("Has clash:           -"));
        assert!(report.contains("pLDDT data not found."));
    }

    #[test]
    fn clash_uses_probability_threshold() {
        let clashing = ConfidenceRecord {
            has_clash: Some(0.6),
            ..Default::default()
        };
        assert!(summarize(&clashing, "x")
            .contains("Has clash:           Yes"));
    }
}
