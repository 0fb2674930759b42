use crate::block::Material;
use crate::coordinates::GridPos;
use crate::inventory::Inventory;
use crate::store::VoxelStore;

/// Half-extent of the square grass field; it spans
/// `[-FIELD_RADIUS, FIELD_RADIUS]` on x and z at y = 0.
pub const FIELD_RADIUS: i32 = 5;

/// Lone stone block in the middle of the field, one cell above it.
pub const LANDMARK: GridPos = GridPos::new(0, 1, 0);

pub const STARTING_STOCK: u32 = 10;

/// The fixed starting layout: a flat 11x11 grass field with the stone
/// landmark as a reference point. There is no procedural generation; every
/// run begins with exactly this world.
pub fn starting_world() -> VoxelStore {
    let mut store = VoxelStore::new();
    for x in -FIELD_RADIUS..=FIELD_RADIUS {
        for z in -FIELD_RADIUS..=FIELD_RADIUS {
            store
                .place(GridPos::new(x, 0, z), Material::Grass)
                .expect("field cells are distinct");
        }
    }
    store
        .place(LANDMARK, Material::Stone)
        .expect("landmark cell sits above the field");
    store
}

pub fn starting_inventory() -> Inventory {
    Inventory::with_stock(STARTING_STOCK, Material::Grass)
}
