use glam::Vec3;

/// Spawn point: centered on the field, standing on the ground plane, a
/// few cells back from the stone landmark.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 2.0, 5.0);

/// The single walking player. Position and velocity are world-space;
/// `grounded` gates the jump impulse. Only the physics step and the jump
/// handler mutate this state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: SPAWN_POSITION,
            velocity: Vec3::ZERO,
            grounded: true,
        }
    }

    /// Camera anchor.
    pub fn eye(&self) -> Vec3 {
        self.position
    }

    /// Fixed look-ahead point one cell in front of the eye.
    pub fn look_target(&self) -> Vec3 {
        self.position - Vec3::Z
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
