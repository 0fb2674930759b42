pub mod actions;
pub mod block;
pub mod coordinates;
pub mod inventory;
pub mod physics;
pub mod player;
pub mod store;
pub mod target;
pub mod worldgen;

pub use glam;

pub use actions::{ActionError, ActionErrorReason, BuildOutcome, MineOutcome, build, mine};
pub use block::{Block, Material};
pub use coordinates::GridPos;
pub use inventory::Inventory;
pub use physics::MoveInput;
pub use player::Player;
pub use store::{StoreError, VoxelStore};
pub use target::{Ray, TargetHit, find_target};
