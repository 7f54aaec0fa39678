//! pLDDT confidence bucketing.
//!
//! The four tiers and their display colors follow the AlphaFold server
//! scheme. This module is the single source of truth for tier boundaries
//! and colors: the 3D coloring callback, the chart reference lines, and
//! the textual report all go through [`ConfidenceTier`].

/// Discrete confidence tier for a per-residue pLDDT score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceTier {
    /// pLDDT >= 90.
    VeryHigh,
    /// 90 > pLDDT >= 70.
    High,
    /// 70 > pLDDT >= 50.
    Low,
    /// pLDDT < 50.
    VeryLow,
}

impl ConfidenceTier {
    /// All tiers, highest confidence first (legend order).
    pub const ALL: [Self; 4] =
        [Self::VeryHigh, Self::High, Self::Low, Self::VeryLow];

    /// Classify a pLDDT score. Total over the real line: inclusive lower
    /// bounds evaluated highest-first, so anything below 50 (including
    /// out-of-range negatives) is [`ConfidenceTier::VeryLow`].
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryHigh
        } else if score >= 70.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// Inclusive lower bound of this tier's score range.
    #[must_use]
    pub const fn lower_bound(self) -> f64 {
        match self {
            Self::VeryHigh => 90.0,
            Self::High => 70.0,
            Self::Low => 50.0,
            Self::VeryLow => 0.0,
        }
    }

    /// Display color as an RGB triple.
    #[must_use]
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::VeryHigh => [0x00, 0x53, 0xD6],
            Self::High => [0x65, 0xCB, 0xF3],
            Self::Low => [0xFF, 0xDB, 0x13],
            Self::VeryLow => [0xFF, 0x7D, 0x45],
        }
    }

    /// Display color as a `#RRGGBB` hex string.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::VeryHigh => "#0053D6",
            Self::High => "#65CBF3",
            Self::Low => "#FFDB13",
            Self::VeryLow => "#FF7D45",
        }
    }

    /// Human-readable tier name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}
