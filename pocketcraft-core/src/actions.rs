use std::error::Error;
use std::fmt;

use crate::block::Material;
use crate::coordinates::GridPos;
use crate::inventory::Inventory;
use crate::store::{StoreError, VoxelStore};
use crate::target::{Ray, find_target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorReason {
    NoTarget,
    OutOfStock,
    Store(StoreError),
}

/// Refused build/mine attempt. Callers treat any refusal as a no-op; the
/// message is only ever surfaced on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionError {
    pub reason: ActionErrorReason,
}

impl ActionError {
    pub fn new(reason: ActionErrorReason) -> Self {
        Self { reason }
    }

    pub fn message(&self) -> &'static str {
        match self.reason {
            ActionErrorReason::NoTarget => "nothing in reach",
            ActionErrorReason::OutOfStock => "selected material is out of stock",
            ActionErrorReason::Store(_) => "world update failed",
        }
    }
}

impl From<StoreError> for ActionError {
    fn from(reason: StoreError) -> Self {
        Self {
            reason: ActionErrorReason::Store(reason),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            ActionErrorReason::Store(err) => {
                write!(f, "{} ({:?})", self.message(), err)
            }
            _ => f.write_str(self.message()),
        }
    }
}

impl Error for ActionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOutcome {
    pub material: Material,
    pub position: GridPos,
    pub remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineOutcome {
    pub material: Material,
    pub position: GridPos,
}

/// Place one unit of the selected material on top of the aimed column.
/// Placement always stacks straight up from the targeted block, stepping
/// past cells that are already occupied; it never goes sideways or below.
/// Store and inventory change together or not at all.
pub fn build(
    store: &mut VoxelStore,
    inventory: &mut Inventory,
    view_ray: Ray,
) -> Result<BuildOutcome, ActionError> {
    let target = find_target(store, view_ray)
        .ok_or_else(|| ActionError::new(ActionErrorReason::NoTarget))?;

    let material = inventory.selected();
    if inventory.count(material) == 0 {
        return Err(ActionError::new(ActionErrorReason::OutOfStock));
    }

    let column = target.position;
    let y = store.lowest_free_above(column.x, column.z, column.y + 1);
    let position = GridPos::new(column.x, y, column.z);

    store.place(position, material)?;
    let taken = inventory.try_take(material);
    debug_assert!(taken, "stock was checked before placing");

    Ok(BuildOutcome {
        material,
        position,
        remaining: inventory.count(material),
    })
}

/// Remove the targeted block and return its material to the inventory.
pub fn mine(
    store: &mut VoxelStore,
    inventory: &mut Inventory,
    view_ray: Ray,
) -> Result<MineOutcome, ActionError> {
    let target = find_target(store, view_ray)
        .ok_or_else(|| ActionError::new(ActionErrorReason::NoTarget))?;

    let material = store.remove(target.position)?;
    inventory.add(material);

    Ok(MineOutcome {
        material,
        position: target.position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worldgen::{starting_inventory, starting_world};
    use glam::Vec3;

    fn down_ray_over(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 5.0, z), Vec3::new(0.0, -1.0, 0.0))
    }

    /// Tracked-material conservation: stock plus placed blocks is constant.
    fn conserved_sum(store: &VoxelStore, inventory: &Inventory) -> u32 {
        inventory.total() + store.len() as u32
    }

    #[test]
    fn build_stacks_on_top_of_the_landmark() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        let outcome = build(&mut store, &mut inventory, down_ray_over(0.5, 0.5)).unwrap();

        // The landmark occupies (0, 1, 0), so the new block lands at y = 2.
        assert_eq!(outcome.position, GridPos::new(0, 2, 0));
        assert_eq!(outcome.material, Material::Grass);
        assert_eq!(outcome.remaining, 9);
        assert_eq!(store.get(GridPos::new(0, 2, 0)), Some(Material::Grass));
        assert_eq!(inventory.count(Material::Grass), 9);
    }

    #[test]
    fn repeated_builds_grow_the_column() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        let ray = down_ray_over(0.5, 0.5);
        for expected_y in 2..5 {
            let outcome = build(&mut store, &mut inventory, ray).unwrap();
            assert_eq!(outcome.position, GridPos::new(0, expected_y, 0));
        }
        assert_eq!(inventory.count(Material::Grass), 7);
    }

    #[test]
    fn build_uses_the_selected_material() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        inventory.select(Material::Stone);
        let outcome = build(&mut store, &mut inventory, down_ray_over(2.5, 2.5)).unwrap();
        assert_eq!(outcome.material, Material::Stone);
        assert_eq!(store.get(GridPos::new(2, 1, 2)), Some(Material::Stone));
        assert_eq!(inventory.count(Material::Stone), 9);
        assert_eq!(inventory.count(Material::Grass), 10);
    }

    #[test]
    fn build_refuses_without_stock() {
        let mut store = starting_world();
        let mut inventory = Inventory::new(Material::Grass);
        let before = store.len();

        let err = build(&mut store, &mut inventory, down_ray_over(0.5, 0.5)).unwrap_err();
        assert_eq!(err.reason, ActionErrorReason::OutOfStock);
        // Neither side changed.
        assert_eq!(store.len(), before);
        assert_eq!(inventory.total(), 0);
    }

    #[test]
    fn build_refuses_without_target() {
        let mut store = VoxelStore::new();
        let mut inventory = starting_inventory();

        let err = build(&mut store, &mut inventory, down_ray_over(0.5, 0.5)).unwrap_err();
        assert_eq!(err.reason, ActionErrorReason::NoTarget);
        assert!(store.is_empty());
        assert_eq!(inventory.total(), 30);
    }

    #[test]
    fn mine_returns_the_material_to_stock() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        let outcome = mine(&mut store, &mut inventory, down_ray_over(3.5, 3.5)).unwrap();

        assert_eq!(outcome.material, Material::Grass);
        assert_eq!(outcome.position, GridPos::new(3, 0, 3));
        assert_eq!(store.len(), 121);
        assert_eq!(inventory.count(Material::Grass), 11);
    }

    #[test]
    fn mine_refuses_without_target() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        let before = store.len();

        let up = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let err = mine(&mut store, &mut inventory, up).unwrap_err();
        assert_eq!(err.reason, ActionErrorReason::NoTarget);
        assert_eq!(store.len(), before);
        assert_eq!(inventory.total(), 30);
    }

    #[test]
    fn mined_stone_can_be_rebuilt_elsewhere() {
        // Round trip: a lone stone block plus one grass cell to aim at.
        let mut store = VoxelStore::new();
        store.place(GridPos::new(0, 0, 0), Material::Stone).unwrap();
        store.place(GridPos::new(1, 0, 0), Material::Grass).unwrap();
        let mut inventory = Inventory::new(Material::Stone);

        mine(&mut store, &mut inventory, down_ray_over(0.5, 0.5)).unwrap();
        assert_eq!(inventory.count(Material::Stone), 1);
        assert_eq!(store.len(), 1);

        build(&mut store, &mut inventory, down_ray_over(1.5, 0.5)).unwrap();
        assert_eq!(inventory.count(Material::Stone), 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(GridPos::new(1, 1, 0)), Some(Material::Stone));
    }

    #[test]
    fn stock_plus_blocks_is_invariant_across_sequences() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        let invariant = conserved_sum(&store, &inventory);

        let rays = [
            down_ray_over(0.5, 0.5),
            down_ray_over(1.5, 1.5),
            down_ray_over(-4.5, -4.5),
            down_ray_over(0.5, 0.5),
        ];
        for ray in rays {
            let _ = build(&mut store, &mut inventory, ray);
            assert_eq!(conserved_sum(&store, &inventory), invariant);
            let _ = mine(&mut store, &mut inventory, ray);
            assert_eq!(conserved_sum(&store, &inventory), invariant);
        }
    }

    #[test]
    fn positions_stay_unique_under_mutation() {
        let mut store = starting_world();
        let mut inventory = starting_inventory();
        for _ in 0..5 {
            let _ = build(&mut store, &mut inventory, down_ray_over(0.5, 0.5));
        }
        let mut positions: Vec<_> = store.blocks().map(|b| b.position).collect();
        let total = positions.len();
        positions.dedup();
        assert_eq!(positions.len(), total);
    }
}
