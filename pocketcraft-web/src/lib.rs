#[cfg(target_arch = "wasm32")]
use macroquad::miniquad;
use macroquad::prelude::*;

use pocketcraft_core::{
    Inventory, Material, MoveInput, Player, Ray, VoxelStore, actions, find_target, physics,
    worldgen,
};

mod hud;
mod joystick;

use crate::hud::HudAction;
use crate::joystick::VirtualJoystick;

const FIXED_STEP_SECONDS: f32 = 1.0 / 60.0;
const SKY_COLOR: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const HIGHLIGHT_COLOR: Color = Color::new(1.0, 0.95, 0.2, 1.0);

struct GameState {
    store: VoxelStore,
    inventory: Inventory,
    player: Player,
    joystick: VirtualJoystick,
    status: Option<String>,
    fps: f32,
    fps_frame_count: u32,
    fps_last_update_time: f64,
}

impl GameState {
    fn new() -> Self {
        Self {
            store: worldgen::starting_world(),
            inventory: worldgen::starting_inventory(),
            player: Player::new(),
            joystick: VirtualJoystick::new(),
            status: None,
            fps: 0.0,
            fps_frame_count: 0,
            fps_last_update_time: get_time(),
        }
    }

    /// The screen-center ray: under the fixed-look camera this is simply
    /// the forward axis from the player's eye.
    fn view_ray(&self) -> Ray {
        Ray::new(self.player.eye(), pocketcraft_core::glam::Vec3::NEG_Z)
    }

    fn fixed_update(&mut self) {
        let input = self.movement_input();
        physics::step(&mut self.player, &self.store, input, FIXED_STEP_SECONDS);
    }

    fn movement_input(&self) -> MoveInput {
        let stick = self.joystick.vector();
        let mut forward = stick.y;
        let mut right = stick.x;
        if is_key_down(KeyCode::W) {
            forward += 1.0;
        }
        if is_key_down(KeyCode::S) {
            forward -= 1.0;
        }
        if is_key_down(KeyCode::D) {
            right += 1.0;
        }
        if is_key_down(KeyCode::A) {
            right -= 1.0;
        }
        MoveInput::new(forward.clamp(-1.0, 1.0), right.clamp(-1.0, 1.0))
    }

    fn handle_input(&mut self) {
        self.joystick.update();

        for point in pressed_points() {
            if self.joystick.contains(point) {
                continue;
            }
            if let Some(action) = hud::hit_test(point) {
                self.apply_action(action);
            }
        }

        // Desktop equivalents for the touch controls.
        if is_key_pressed(KeyCode::Space) {
            self.apply_action(HudAction::Jump);
        }
        if is_key_pressed(KeyCode::J) {
            self.apply_action(HudAction::Mine);
        }
        if is_key_pressed(KeyCode::B) {
            self.apply_action(HudAction::Build);
        }
        for (key, material) in [
            (KeyCode::Key1, Material::Grass),
            (KeyCode::Key2, Material::Dirt),
            (KeyCode::Key3, Material::Stone),
        ] {
            if is_key_pressed(key) {
                self.apply_action(HudAction::Select(material));
            }
        }
    }

    fn apply_action(&mut self, action: HudAction) {
        let ray = self.view_ray();
        match action {
            HudAction::Mine => {
                match actions::mine(&mut self.store, &mut self.inventory, ray) {
                    Ok(outcome) => self.set_status(format!("mined {}", outcome.material.name())),
                    Err(err) => self.set_status(err.message().to_string()),
                }
            }
            HudAction::Build => {
                match actions::build(&mut self.store, &mut self.inventory, ray) {
                    Ok(outcome) => self.set_status(format!(
                        "placed {} ({} left)",
                        outcome.material.name(),
                        outcome.remaining
                    )),
                    Err(err) => self.set_status(err.message().to_string()),
                }
            }
            HudAction::Jump => physics::jump(&mut self.player),
            HudAction::Select(material) => {
                self.inventory.select(material);
                self.set_status(format!("selected {}", material.name()));
            }
        }
    }

    fn set_status(&mut self, message: String) {
        log_action(&message);
        self.status = Some(message);
    }

    fn update_fps_if_due(&mut self) {
        let now = get_time();
        self.fps_frame_count += 1;
        let elapsed = now - self.fps_last_update_time;
        if elapsed >= 1.0 {
            self.fps = self.fps_frame_count as f32 / elapsed as f32;
            self.fps_frame_count = 0;
            self.fps_last_update_time = now;
        }
    }

    fn render(&self) {
        clear_background(SKY_COLOR);

        set_camera(&Camera3D {
            position: render_vec(self.player.eye()),
            target: render_vec(self.player.look_target()),
            up: vec3(0.0, 1.0, 0.0),
            ..Default::default()
        });

        for block in self.store.blocks() {
            draw_cube(
                render_vec(block.position.center()),
                Vec3::ONE,
                None,
                material_color(block.material),
            );
        }

        if let Some(hit) = find_target(&self.store, self.view_ray()) {
            draw_cube_wires(
                render_vec(hit.position.center()),
                Vec3::splat(1.02),
                HIGHLIGHT_COLOR,
            );
        }

        set_default_camera();
        hud::draw(&self.inventory, self.status.as_deref(), self.fps);
        self.joystick.draw();
    }
}

/// Screen points that began a press this frame, from touches and the mouse.
fn pressed_points() -> Vec<Vec2> {
    let mut points: Vec<Vec2> = touches()
        .into_iter()
        .filter(|touch| touch.phase == TouchPhase::Started)
        .map(|touch| touch.position)
        .collect();
    if is_mouse_button_pressed(MouseButton::Left) {
        let (mouse_x, mouse_y) = mouse_position();
        points.push(vec2(mouse_x, mouse_y));
    }
    points
}

fn render_vec(v: pocketcraft_core::glam::Vec3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

fn material_color(material: Material) -> Color {
    let [r, g, b] = material.color();
    Color::from_rgba(r, g, b, 255)
}

fn log_action(label: &str) {
    #[cfg(target_arch = "wasm32")]
    miniquad::info!("{}", label);
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", label);
}

pub async fn run() {
    install_panic_hook();
    let mut game = GameState::new();
    let mut accumulator = 0.0_f32;

    loop {
        // Consume real elapsed time in fixed-size simulation steps.
        accumulator += get_frame_time();
        while accumulator >= FIXED_STEP_SECONDS {
            game.fixed_update();
            accumulator -= FIXED_STEP_SECONDS;
        }

        game.handle_input();
        game.update_fps_if_due();
        game.render();

        next_frame().await;
    }
}

#[cfg(target_arch = "wasm32")]
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if let Some(location) = info.location() {
            miniquad::error!("panic at {}:{}: {}", location.file(), location.line(), msg);
        } else {
            miniquad::error!("panic: {}", msg);
        }
    }));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_panic_hook() {}
