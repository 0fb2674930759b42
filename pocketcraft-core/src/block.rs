use serde::{Deserialize, Serialize};

use crate::coordinates::GridPos;

/// Closed set of block materials. Every material maps to a fixed display
/// name and renderer color; behavior never dispatches through trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Grass,
    Dirt,
    Stone,
}

impl Material {
    pub const COUNT: usize = 3;

    /// All materials in hotbar order.
    pub const ALL: [Material; Self::COUNT] = [Material::Grass, Material::Dirt, Material::Stone];

    pub fn name(self) -> &'static str {
        match self {
            Material::Grass => "grass",
            Material::Dirt => "dirt",
            Material::Stone => "stone",
        }
    }

    /// sRGB tint used by the renderer.
    pub fn color(self) -> [u8; 3] {
        match self {
            Material::Grass => [0x00, 0xff, 0x00],
            Material::Dirt => [0x8b, 0x45, 0x13],
            Material::Stone => [0x80, 0x80, 0x80],
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Material::Grass => 0,
            Material::Dirt => 1,
            Material::Stone => 2,
        }
    }
}

/// A unit cube voxel. Blocks are owned exclusively by the store; no two
/// blocks ever share a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub position: GridPos,
    pub material: Material,
}

impl Block {
    pub fn new(position: GridPos, material: Material) -> Self {
        Self { position, material }
    }
}
