use serde::{Deserialize, Serialize};

use crate::block::Material;

/// Per-material stock plus the hotbar selection. Counts are unsigned, so
/// the no-negative-entries invariant holds by construction; `try_take`
/// refuses at zero instead of underflowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u32; Material::COUNT],
    selected: Material,
}

impl Inventory {
    pub fn new(selected: Material) -> Self {
        Self {
            counts: [0; Material::COUNT],
            selected,
        }
    }

    /// The same starting stock for every material.
    pub fn with_stock(per_material: u32, selected: Material) -> Self {
        Self {
            counts: [per_material; Material::COUNT],
            selected,
        }
    }

    pub fn count(&self, material: Material) -> u32 {
        self.counts[material.index()]
    }

    pub fn selected(&self) -> Material {
        self.selected
    }

    pub fn select(&mut self, material: Material) {
        self.selected = material;
    }

    /// Return one unit of `material` to stock. Mined blocks always fit;
    /// there is no capacity limit.
    pub fn add(&mut self, material: Material) {
        let slot = &mut self.counts[material.index()];
        *slot = slot.saturating_add(1);
    }

    /// Take one unit of `material` if any is left.
    pub fn try_take(&mut self, material: Material) -> bool {
        let slot = &mut self.counts[material.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// `(material, count)` pairs in hotbar order, for display.
    pub fn entries(&self) -> impl Iterator<Item = (Material, u32)> + '_ {
        Material::ALL.into_iter().map(|material| (material, self.count(material)))
    }

    /// Total units across all materials; used by conservation checks.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
