use macroquad::prelude::*;
use pocketcraft_core::{Inventory, Material};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAction {
    Mine,
    Build,
    Jump,
    Select(Material),
}

const MARGIN: f32 = 36.0;
const BUTTON_WIDTH: f32 = 110.0;
const BUTTON_HEIGHT: f32 = 48.0;
const GAP: f32 = 12.0;
const SLOT_WIDTH: f32 = 120.0;
const SLOT_HEIGHT: f32 = 34.0;

const BUTTON_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.4);
const SLOT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.4);
const SLOT_ACTIVE_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.35);

/// Action buttons stacked above the bottom-right corner.
fn action_buttons() -> [(Rect, HudAction, &'static str); 3] {
    let x = screen_width() - MARGIN - BUTTON_WIDTH;
    let bottom = screen_height() - MARGIN;
    let row = |index: f32| {
        Rect::new(
            x,
            bottom - BUTTON_HEIGHT - index * (BUTTON_HEIGHT + GAP),
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    };
    [
        (row(0.0), HudAction::Jump, "JUMP"),
        (row(1.0), HudAction::Build, "BUILD"),
        (row(2.0), HudAction::Mine, "MINE"),
    ]
}

/// Hotbar slots centered along the bottom edge, one per material.
fn hotbar_slots() -> [(Rect, Material); Material::COUNT] {
    let count = Material::COUNT as f32;
    let total = count * SLOT_WIDTH + (count - 1.0) * GAP;
    let y = screen_height() - MARGIN - SLOT_HEIGHT;
    let mut x = (screen_width() - total) / 2.0;

    let mut slots = [(Rect::new(0.0, 0.0, 0.0, 0.0), Material::Grass); Material::COUNT];
    for (slot, material) in slots.iter_mut().zip(Material::ALL) {
        *slot = (Rect::new(x, y, SLOT_WIDTH, SLOT_HEIGHT), material);
        x += SLOT_WIDTH + GAP;
    }
    slots
}

/// Maps a pressed screen point to the HUD control under it, if any.
pub fn hit_test(point: Vec2) -> Option<HudAction> {
    for (rect, action, _) in action_buttons() {
        if rect.contains(point) {
            return Some(action);
        }
    }
    for (rect, material) in hotbar_slots() {
        if rect.contains(point) {
            return Some(HudAction::Select(material));
        }
    }
    None
}

pub fn draw(inventory: &Inventory, status: Option<&str>, fps: f32) {
    draw_crosshair();

    for (rect, _, label) in action_buttons() {
        draw_button(rect, label);
    }

    for ((rect, material), (_, count)) in hotbar_slots().into_iter().zip(inventory.entries()) {
        let fill = if inventory.selected() == material {
            SLOT_ACTIVE_COLOR
        } else {
            SLOT_COLOR
        };
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
        let label = format!("{} ({})", material.name(), count);
        draw_text(&label, rect.x + 10.0, rect.y + rect.h - 11.0, 22.0, WHITE);
    }

    if let Some(status) = status {
        draw_text(status, MARGIN, 30.0, 24.0, WHITE);
    }
    draw_text(&format!("fps: {:.0}", fps), screen_width() - 90.0, 30.0, 20.0, WHITE);
}

fn draw_button(rect: Rect, label: &str) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, BUTTON_COLOR);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, WHITE);
    let size = measure_text(label, None, 24, 1.0);
    draw_text(
        label,
        rect.x + (rect.w - size.width) / 2.0,
        rect.y + (rect.h + size.height) / 2.0,
        24.0,
        WHITE,
    );
}

fn draw_crosshair() {
    let cx = screen_width() / 2.0;
    let cy = screen_height() / 2.0;
    draw_line(cx - 8.0, cy, cx + 8.0, cy, 2.0, WHITE);
    draw_line(cx, cy - 8.0, cx, cy + 8.0, 2.0, WHITE);
}
