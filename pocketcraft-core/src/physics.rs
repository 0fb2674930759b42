use glam::Vec3;

use crate::player::Player;
use crate::store::VoxelStore;

pub const MOVE_SPEED: f32 = 5.0;
pub const GRAVITY: f32 = 9.8;
pub const JUMP_SPEED: f32 = 7.0;
pub const DAMPING: f32 = 0.9;
pub const GROUND_LEVEL: f32 = 2.0;
pub const PLAYER_HALF_WIDTH: f32 = 0.3;
pub const PLAYER_HEIGHT: f32 = 1.8;

/// Planar movement for one tick. Components are expected in [-1, 1]; the
/// input adapter owns the clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveInput {
    pub forward: f32,
    pub right: f32,
}

impl MoveInput {
    pub fn new(forward: f32, right: f32) -> Self {
        Self { forward, right }
    }
}

/// Advance the player by one tick of `dt` seconds: accelerate from input,
/// apply gravity, move unless the candidate position collides, clamp to
/// the ground level, then damp velocity. The tick never fails; a blocked
/// move simply keeps the previous position.
pub fn step(player: &mut Player, store: &VoxelStore, input: MoveInput, dt: f32) {
    // Forward is the fixed look axis (0, 0, -1); strafe is (1, 0, 0).
    player.velocity.x += input.right * MOVE_SPEED * dt;
    player.velocity.z -= input.forward * MOVE_SPEED * dt;

    player.velocity.y -= GRAVITY * dt;

    let candidate = player.position + player.velocity * dt;

    if collides(store, candidate) {
        player.velocity.x = 0.0;
        player.velocity.z = 0.0;
        // Cancel upward-blocked motion but keep falling.
        player.velocity.y = player.velocity.y.min(0.0);
    } else {
        player.position = candidate;
    }

    if player.position.y < GROUND_LEVEL {
        player.velocity.y = 0.0;
        player.position.y = GROUND_LEVEL;
        player.grounded = true;
    }

    player.velocity *= DAMPING;
}

/// Jump impulse. An event handler rather than part of the tick; only
/// effective while the player is grounded.
pub fn jump(player: &mut Player) {
    if !player.grounded {
        return;
    }
    player.velocity.y = JUMP_SPEED;
    player.grounded = false;
}

/// Whether the player box at `pos` (half width on x/z, full height up
/// from the feet) strictly overlaps any stored cube on all three axes.
/// Touching faces count as free.
fn collides(store: &VoxelStore, pos: Vec3) -> bool {
    store.blocks().any(|block| {
        let min = block.position.min_corner();
        let max = block.position.max_corner();
        pos.x + PLAYER_HALF_WIDTH > min.x
            && pos.x - PLAYER_HALF_WIDTH < max.x
            && pos.y < max.y
            && pos.y + PLAYER_HEIGHT > min.y
            && pos.z + PLAYER_HALF_WIDTH > min.z
            && pos.z - PLAYER_HALF_WIDTH < max.z
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Material;
    use crate::coordinates::GridPos;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn gravity_is_clamped_at_ground_level() {
        let mut player = Player::new();
        let store = VoxelStore::new();
        for _ in 0..120 {
            step(&mut player, &store, MoveInput::default(), DT);
            assert!(player.position.y >= GROUND_LEVEL);
        }
        assert_eq!(player.position.y, GROUND_LEVEL);
        assert!(player.grounded);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn forward_input_accelerates_toward_negative_z() {
        let mut player = Player::new();
        let store = VoxelStore::new();
        let start_z = player.position.z;
        step(&mut player, &store, MoveInput::new(1.0, 0.0), DT);
        assert!(player.position.z < start_z);
        assert!(player.velocity.z < 0.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn strafe_input_accelerates_along_positive_x() {
        let mut player = Player::new();
        let store = VoxelStore::new();
        step(&mut player, &store, MoveInput::new(0.0, 1.0), DT);
        assert!(player.position.x > 0.0);
        assert!(player.velocity.x > 0.0);
    }

    #[test]
    fn velocity_is_damped_every_tick() {
        let mut player = Player::new();
        let store = VoxelStore::new();
        player.velocity.x = 1.0;
        step(&mut player, &store, MoveInput::default(), DT);
        // One tick with no input: the horizontal component only decays.
        assert!((player.velocity.x - DAMPING).abs() < 1e-6);
    }

    #[test]
    fn hard_fall_onto_a_block_column_keeps_the_floor() {
        // Player above a block column; a violent downward tick must not
        // tunnel below the clamp floor.
        let mut player = Player::new();
        let mut store = VoxelStore::new();
        store.place(GridPos::new(0, 0, 5), Material::Stone).unwrap();
        player.velocity.y = -150.0;
        step(&mut player, &store, MoveInput::default(), DT);
        assert_eq!(player.position, Player::new().position);
        assert!(player.position.y >= GROUND_LEVEL);
    }

    #[test]
    fn walking_into_a_wall_zeroes_horizontal_velocity() {
        let mut player = Player::new();
        let mut store = VoxelStore::new();
        // Wall cube one cell ahead at body height.
        store.place(GridPos::new(0, 2, 3), Material::Dirt).unwrap();
        player.velocity.z = -50.0;
        step(&mut player, &store, MoveInput::default(), DT);
        assert_eq!(player.position.z, 5.0);
        assert_eq!(player.velocity.z, 0.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn jump_is_gated_on_grounded() {
        let mut player = Player::new();
        jump(&mut player);
        assert_eq!(player.velocity.y, JUMP_SPEED);
        assert!(!player.grounded);

        // A second impulse mid-air is ignored.
        player.velocity.y = 1.0;
        jump(&mut player);
        assert_eq!(player.velocity.y, 1.0);
    }

    #[test]
    fn jump_lifts_off_then_returns_to_the_ground() {
        let mut player = Player::new();
        let store = VoxelStore::new();
        jump(&mut player);
        step(&mut player, &store, MoveInput::default(), DT);
        assert!(player.position.y > GROUND_LEVEL);
        assert!(!player.grounded);

        for _ in 0..600 {
            step(&mut player, &store, MoveInput::default(), DT);
        }
        assert_eq!(player.position.y, GROUND_LEVEL);
        assert!(player.grounded);
    }

    #[test]
    fn rising_into_an_overhead_block_cancels_upward_motion() {
        let mut player = Player::new();
        let mut store = VoxelStore::new();
        // Ceiling cube above the player's head room.
        store.place(GridPos::new(0, 4, 5), Material::Stone).unwrap();
        jump(&mut player);
        let mut blocked = false;
        for _ in 0..30 {
            step(&mut player, &store, MoveInput::default(), DT);
            if player.velocity.y <= 0.0 && player.position.y > GROUND_LEVEL {
                blocked = true;
            }
            // The head never enters the ceiling cube.
            assert!(player.position.y + PLAYER_HEIGHT <= 4.0 + 1e-4);
        }
        assert!(blocked);
    }

    #[test]
    fn standing_on_a_face_does_not_collide() {
        // Feet exactly on a cube's top face: inclusive boundaries are free.
        let mut store = VoxelStore::new();
        store.place(GridPos::new(0, 1, 5), Material::Grass).unwrap();
        assert!(!collides(&store, Vec3::new(0.5, 2.0, 5.5)));
        // A hair lower overlaps.
        assert!(collides(&store, Vec3::new(0.5, 1.999, 5.5)));
    }
}
