//! Injected capability for an external 3D structure renderer.
//!
//! The crate never talks to a concrete molecular viewer. Whatever renders
//! the structure is passed in behind [`StructureSurface`] and handed the
//! opaque mmCIF text together with a per-atom coloring callback. AlphaFold
//! outputs store each atom's pLDDT in the B-factor slot, so the callback is
//! keyed on that scalar and resolved through the shared tier palette.

use crate::tier::ConfidenceTier;

/// Per-atom coloring callback: confidence scalar in, RGB color out.
pub type AtomColorFn<'a> = &'a dyn Fn(f64) -> [u8; 3];

/// An external 3D molecular viewer.
///
/// Implementations display the given structure with cartoon-style coloring
/// driven by `color`; the crate supplies [`plddt_atom_color`] so every
/// surface shows the same palette as the chart legend and the report.
pub trait StructureSurface {
    /// Display the mmCIF text, coloring each atom via `color` applied to
    /// the atom's confidence scalar (its B-factor slot).
    fn show_structure(&mut self, cif: &str, color: AtomColorFn<'_>);
}

/// Tier color for one atom's pLDDT value.
#[must_use]
pub fn plddt_atom_color(plddt: f64) -> [u8; 3] {
    ConfidenceTier::classify(plddt).color()
}

/// Legend entries for the 3D view, highest confidence first: tier label
/// and its hex color.
#[must_use]
pub fn legend() -> [(&'static str, &'static str); 4] {
    let mut entries = [("", ""); 4];
    for (slot, tier) in entries.iter_mut().zip(ConfidenceTier::ALL) {
        *slot = (tier.label(), tier.hex());
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the host handed to the surface.
    struct RecordingSurface {
        cif: String,
        colors: Vec<[u8; 3]>,
    }

    impl StructureSurface for RecordingSurface {
        fn show_structure(&mut self, cif: &str, color: AtomColorFn<'_>) {
            self.cif = cif.to_owned();
            self.colors =
                [95.0, 75.0, 55.0, 20.0].iter().map(|&b| color(b)).collect();
        }
    }

    #[test]
    fn surface_receives_opaque_text_and_tier_colors() {
        let mut surface = RecordingSurface {
            cif: String::new(),
            colors: Vec::new(),
        };
        surface.show_structure("data_model\n", &plddt_atom_color);
        assert_eq!(surface.cif, "data_model\n");
        assert_eq!(
            surface.colors,
            vec![
                ConfidenceTier::VeryHigh.color(),
                ConfidenceTier::High.color(),
                ConfidenceTier::Low.color(),
                ConfidenceTier::VeryLow.color(),
            ]
        );
    }

    #[test]
    fn legend_is_ordered_highest_first() {
        let entries = legend();
        assert_eq!(entries[0], ("Very High", "#0053D6"));
        assert_eq!(entries[3], ("Very Low", "#FF7D45"));
    }
}
