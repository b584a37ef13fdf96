use macroquad::prelude::*;

use crate::bubble::Bubble;
use crate::fish::Fish;
use crate::food::Pellet;
use crate::simulation::TankSnapshot;
use crate::tank::Tank;

const WATER_TOP: Color = Color::new(0.03, 0.57, 0.70, 1.0);
const WATER_MID: Color = Color::new(0.12, 0.25, 0.69, 1.0);
const WATER_BOTTOM: Color = Color::new(0.19, 0.18, 0.51, 1.0);
const SAND_TOP: Color = Color::new(0.71, 0.51, 0.24, 1.0);
const SAND_BOTTOM: Color = Color::new(0.52, 0.30, 0.06, 1.0);
const PELLET_COLOR: Color = Color::new(0.52, 0.30, 0.06, 0.8);
const BUBBLE_COLOR: Color = Color::new(0.40, 0.91, 0.98, 1.0);
const GRADIENT_BANDS: usize = 48;

/// Draw one frame of the tank from a published snapshot. Read-only: the
/// renderer has no write path back into the simulation.
pub fn draw(snapshot: &TankSnapshot, tank: &Tank) {
    clear_background(WATER_MID);
    draw_water(tank);
    draw_light_rays(tank);

    for fish in &snapshot.fish {
        draw_fish(fish);
    }
    for pellet in &snapshot.food {
        draw_pellet(pellet);
    }
    for bubble in &snapshot.bubbles {
        draw_bubble(bubble);
    }

    draw_sand(tank);
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Vertical gradient, cyan surface down to deep indigo.
fn draw_water(tank: &Tank) {
    let band_h = tank.height / GRADIENT_BANDS as f32;
    for i in 0..GRADIENT_BANDS {
        let t = i as f32 / (GRADIENT_BANDS - 1) as f32;
        let color = if t < 0.5 {
            lerp_color(WATER_TOP, WATER_MID, t * 2.0)
        } else {
            lerp_color(WATER_MID, WATER_BOTTOM, (t - 0.5) * 2.0)
        };
        draw_rectangle(0.0, i as f32 * band_h, tank.width, band_h + 1.0, color);
    }
}

/// Two faint skewed shafts of light from the surface.
fn draw_light_rays(tank: &Tank) {
    let skew = tank.height * 0.2;
    for (x0, w, alpha) in [
        (tank.width * 0.25, tank.width * 0.5, 0.08),
        (0.0, tank.width * 0.5, 0.04),
    ] {
        let tint = Color::new(1.0, 1.0, 1.0, alpha);
        draw_triangle(
            vec2(x0, 0.0),
            vec2(x0 + w, 0.0),
            vec2(x0 + skew, tank.height),
            tint,
        );
        draw_triangle(
            vec2(x0 + w, 0.0),
            vec2(x0 + w + skew, tank.height),
            vec2(x0 + skew, tank.height),
            tint,
        );
    }
}

fn draw_sand(tank: &Tank) {
    let top = tank.sand_line();
    let h = tank.height - top;
    let bands = 8;
    for i in 0..bands {
        let t = i as f32 / (bands - 1) as f32;
        draw_rectangle(
            0.0,
            top + i as f32 * h / bands as f32,
            tank.width,
            h / bands as f32 + 1.0,
            lerp_color(SAND_TOP, SAND_BOTTOM, 1.0 - t),
        );
    }
    // Pebble speckles, deterministic so they do not shimmer.
    let pebble = Color::new(0.63, 0.32, 0.18, 0.4);
    let mut x = 7.0;
    while x < tank.width {
        let y = top + 12.0 + (x * 0.37).sin().abs() * (h - 24.0);
        draw_circle(x, y, 3.0, pebble);
        x += 23.0;
    }
}

fn draw_fish(fish: &Fish) {
    let half_w = fish.size * 0.5;
    let half_h = fish.size / 3.6; // 1.8 aspect ratio
    let bob = (fish.animation_ticker * 0.05).sin() * fish.size * 0.05;
    let cx = fish.pos.x + half_w;
    let cy = fish.pos.y + half_h + bob;
    // Fish face the direction they swim; the sprite flips, it does not
    // rotate.
    let dir = if fish.vel.x >= 0.0 { 1.0 } else { -1.0 };

    let darker = Color::new(
        (fish.color.r - 0.08).max(0.0),
        (fish.color.g - 0.08).max(0.0),
        (fish.color.b - 0.08).max(0.0),
        1.0,
    );

    // Tail, flapping around its joint at the back of the body.
    let flap = (fish.animation_ticker * 0.1 * fish.tail_speed).sin() * half_h * 0.6;
    let joint = vec2(cx - dir * half_w * 0.7, cy);
    draw_triangle(
        joint,
        vec2(joint.x - dir * half_w * 0.6, cy - half_h * 0.8 + flap),
        vec2(joint.x - dir * half_w * 0.6, cy + half_h * 0.8 + flap),
        darker,
    );

    // Body.
    draw_ellipse(cx, cy, half_w, half_h, 0.0, fish.color);

    // Pectoral fin.
    draw_triangle(
        vec2(cx + dir * half_w * 0.2, cy + half_h * 0.2),
        vec2(cx - dir * half_w * 0.2, cy + half_h * 0.9),
        vec2(cx + dir * half_w * 0.4, cy + half_h * 0.7),
        darker,
    );

    // Eye.
    let eye = vec2(cx + dir * half_w * 0.6, cy - half_h * 0.3);
    draw_circle(eye.x, eye.y, fish.size * 0.05, WHITE);
    draw_circle(eye.x + dir * 1.0, eye.y, fish.size * 0.025, BLACK);
}

fn draw_pellet(pellet: &Pellet) {
    draw_circle(pellet.pos.x, pellet.pos.y, 4.0, PELLET_COLOR);
}

fn draw_bubble(bubble: &Bubble) {
    // Smaller bubbles fade out, as the original did.
    let alpha = (bubble.size / 25.0).max(0.1) * 0.5;
    let color = Color::new(BUBBLE_COLOR.r, BUBBLE_COLOR.g, BUBBLE_COLOR.b, alpha);
    draw_circle_lines(
        bubble.pos.x + bubble.size * 0.5,
        bubble.pos.y + bubble.size * 0.5,
        bubble.size * 0.5,
        2.0,
        color,
    );
}
