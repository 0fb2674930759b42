use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use crate::block::{Block, Material};
use crate::coordinates::GridPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    Occupied(GridPos),
    NotFound(GridPos),
}

impl StoreError {
    pub fn message(&self) -> &'static str {
        match self {
            StoreError::Occupied(_) => "a block already occupies that cell",
            StoreError::NotFound(_) => "no block occupies that cell",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (StoreError::Occupied(pos) | StoreError::NotFound(pos)) = self;
        write!(f, "{} ({}, {}, {})", self.message(), pos.x, pos.y, pos.z)
    }
}

impl Error for StoreError {}

/// The authoritative set of placed blocks, keyed by grid position.
/// Iteration is in ascending position order, which keeps every
/// downstream scan (targeting, collision) deterministic.
#[derive(Debug, Clone, Default)]
pub struct VoxelStore {
    blocks: BTreeMap<GridPos, Material>,
}

impl VoxelStore {
    pub fn new() -> Self {
        Self {
            blocks: BTreeMap::new(),
        }
    }

    pub fn place(&mut self, position: GridPos, material: Material) -> Result<(), StoreError> {
        if self.blocks.contains_key(&position) {
            return Err(StoreError::Occupied(position));
        }
        self.blocks.insert(position, material);
        Ok(())
    }

    pub fn remove(&mut self, position: GridPos) -> Result<Material, StoreError> {
        self.blocks
            .remove(&position)
            .ok_or(StoreError::NotFound(position))
    }

    pub fn get(&self, position: GridPos) -> Option<Material> {
        self.blocks.get(&position).copied()
    }

    pub fn block_at(&self, position: GridPos) -> Option<Block> {
        self.get(position)
            .map(|material| Block::new(position, material))
    }

    /// First free cell in column (x, z) at or above `base`, stepping
    /// upward past already-occupied cells. Returns `base` itself when the
    /// column is free there, including on an empty store.
    pub fn lowest_free_above(&self, x: i32, z: i32, base: i32) -> i32 {
        let mut y = base;
        while self.blocks.contains_key(&GridPos::new(x, y, z)) {
            y += 1;
        }
        y
    }

    /// All placed blocks in ascending position order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.blocks
            .iter()
            .map(|(&position, &material)| Block::new(position, material))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
