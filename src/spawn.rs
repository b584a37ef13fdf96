use macroquad::prelude::*;
use ::rand::Rng;

use crate::bubble::Bubble;
use crate::config;
use crate::fish::Fish;
use crate::tank::Tank;

/// Body colors, one picked at random per fish.
pub const FISH_PALETTE: [u32; 8] = [
    0xff6b6b, 0xf94144, 0xf3722c, 0xf8961e, 0xf9c74f, 0x90be6d, 0x43aa8b, 0x577590,
];

/// Build a fish with randomized attributes, inset from the tank edges so
/// it starts well inside the swim band.
pub fn spawn_fish(id: u32, tank: &Tank, rng: &mut impl Rng) -> Fish {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let speed = rng.gen_range(config::FISH_SPEED_MIN..config::FISH_SPEED_MAX);
    Fish {
        id,
        pos: vec2(
            rng.gen_range(config::SPAWN_INSET_X..tank.width - config::SPAWN_INSET_X),
            rng.gen_range(config::SPAWN_INSET_TOP..tank.height - config::SPAWN_INSET_BOTTOM),
        ),
        vel: vec2(angle.cos(), angle.sin()) * speed,
        speed,
        size: rng.gen_range(config::FISH_SIZE_MIN..config::FISH_SIZE_MAX),
        color: Color::from_hex(FISH_PALETTE[rng.gen_range(0..FISH_PALETTE.len())]),
        target_food: None,
        turn_cooldown: rng.gen_range(0..=config::TURN_COOLDOWN_MAX),
        animation_ticker: rng.gen_range(0.0..360.0),
        tail_speed: rng.gen_range(1.5..2.5),
    }
}

/// Build a bubble just below the visible bottom so it rises into view.
pub fn spawn_bubble(id: u32, tank: &Tank, rng: &mut impl Rng) -> Bubble {
    Bubble {
        id,
        pos: vec2(
            rng.gen_range(0.0..tank.width),
            tank.height + rng.gen_range(0.0..config::BUBBLE_START_OFFSET),
        ),
        size: rng.gen_range(config::BUBBLE_SIZE_MIN..config::BUBBLE_SIZE_MAX),
        speed: rng.gen_range(config::BUBBLE_SPEED_MIN..config::BUBBLE_SPEED_MAX),
    }
}

/// Random drop point for the feed action, anywhere across the surface.
pub fn random_feed_x(tank: &Tank, rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..tank.width)
}
