use macroquad::prelude::*;

const BASE_RADIUS: f32 = 70.0;
const KNOB_RADIUS: f32 = 28.0;
const MARGIN: f32 = 36.0;

const BASE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.15);
const RING_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.5);
const KNOB_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.6);

/// Virtual joystick anchored above the bottom-left corner. One active
/// touch (or a mouse drag that starts inside the base) maps to a planar
/// movement vector with both components in [-1, 1].
pub struct VirtualJoystick {
    active_touch: Option<u64>,
    mouse_active: bool,
    offset: Vec2,
}

impl VirtualJoystick {
    pub fn new() -> Self {
        Self {
            active_touch: None,
            mouse_active: false,
            offset: Vec2::ZERO,
        }
    }

    fn base_center() -> Vec2 {
        vec2(
            MARGIN + BASE_RADIUS,
            screen_height() - MARGIN - BASE_RADIUS,
        )
    }

    /// Whether a press at `point` belongs to the joystick rather than the
    /// rest of the HUD.
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(Self::base_center()) <= BASE_RADIUS
    }

    pub fn update(&mut self) {
        let center = Self::base_center();
        let reach = BASE_RADIUS - KNOB_RADIUS;

        for touch in touches() {
            match touch.phase {
                TouchPhase::Started => {
                    if self.active_touch.is_none()
                        && touch.position.distance(center) <= BASE_RADIUS
                    {
                        self.active_touch = Some(touch.id);
                        self.offset = Self::clamped_offset(touch.position, center, reach);
                    }
                }
                TouchPhase::Moved | TouchPhase::Stationary => {
                    if self.active_touch == Some(touch.id) {
                        self.offset = Self::clamped_offset(touch.position, center, reach);
                    }
                }
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    if self.active_touch == Some(touch.id) {
                        self.active_touch = None;
                        self.offset = Vec2::ZERO;
                    }
                }
            }
        }

        if self.active_touch.is_some() {
            return;
        }

        // Mouse fallback for desktop.
        let (mouse_x, mouse_y) = mouse_position();
        let mouse = vec2(mouse_x, mouse_y);
        if is_mouse_button_pressed(MouseButton::Left) && mouse.distance(center) <= BASE_RADIUS {
            self.mouse_active = true;
        }
        if self.mouse_active {
            if is_mouse_button_down(MouseButton::Left) {
                self.offset = Self::clamped_offset(mouse, center, reach);
            } else {
                self.mouse_active = false;
                self.offset = Vec2::ZERO;
            }
        }
    }

    fn clamped_offset(point: Vec2, center: Vec2, reach: f32) -> Vec2 {
        let delta = point - center;
        let len = delta.length();
        if len > reach { delta / len } else { delta / reach }
    }

    /// Movement vector for the physics input: x is strafe, y is forward.
    /// Screen y grows downward, so pushing the knob up means forward.
    pub fn vector(&self) -> Vec2 {
        vec2(self.offset.x, -self.offset.y)
    }

    pub fn draw(&self) {
        let center = Self::base_center();
        let reach = BASE_RADIUS - KNOB_RADIUS;
        draw_circle(center.x, center.y, BASE_RADIUS, BASE_COLOR);
        draw_circle_lines(center.x, center.y, BASE_RADIUS, 2.0, RING_COLOR);
        let knob = center + self.offset * reach;
        draw_circle(knob.x, knob.y, KNOB_RADIUS, KNOB_COLOR);
    }
}

impl Default for VirtualJoystick {
    fn default() -> Self {
        Self::new()
    }
}
