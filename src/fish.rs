use std::collections::HashSet;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::food::{FoodId, Pellet};
use crate::tank::Tank;

/// One fish. `target_food` is a weak reference: the pellet it names may
/// vanish between ticks, so it is re-resolved by lookup every update and
/// treated as absent on a miss.
#[derive(Clone, Debug)]
pub struct Fish {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Cruising speed, fixed at creation. Pursuit runs at
    /// `speed * FISH_ACCELERATION`.
    pub speed: f32,
    pub size: f32,
    pub color: Color,
    pub target_food: Option<FoodId>,
    pub turn_cooldown: i32,
    /// Cosmetic bobbing counter, never read by the physics.
    pub animation_ticker: f32,
    pub tail_speed: f32,
}

impl Fish {
    /// One tick of behavior: acquire a target, pursue or eat it, wander
    /// otherwise, integrate, reflect off the tank walls.
    ///
    /// Pellets whose ids are already in `eaten` count as gone; on a
    /// successful eat this fish inserts the id so later fish in the same
    /// tick cannot claim it (first-come-first-served in update order).
    pub fn update(
        &mut self,
        pellets: &[Pellet],
        eaten: &mut HashSet<FoodId>,
        tank: &Tank,
        rng: &mut impl Rng,
    ) {
        self.animation_ticker += 1.0;

        // A fish already pursuing does not re-evaluate, even if a closer
        // pellet appears. Ties at the minimum distance go to the first
        // pellet in scan order.
        if self.target_food.is_none() {
            let mut min_distance = config::FISH_DETECTION_RADIUS;
            for pellet in pellets {
                if eaten.contains(&pellet.id) {
                    continue;
                }
                let distance = self.pos.distance(pellet.pos);
                if distance < min_distance {
                    min_distance = distance;
                    self.target_food = Some(pellet.id);
                }
            }
        }

        let target = self
            .target_food
            .and_then(|id| pellets.iter().find(|p| p.id == id))
            .filter(|p| !eaten.contains(&p.id));

        if let Some(pellet) = target {
            let delta = pellet.pos - self.pos;
            if delta.length() < config::FISH_EAT_RADIUS {
                eaten.insert(pellet.id);
                self.target_food = None;
                // Velocity is left as-is; only the branches below set it.
            } else {
                let angle = delta.y.atan2(delta.x);
                let pursuit = self.speed * config::FISH_ACCELERATION;
                self.vel = vec2(angle.cos(), angle.sin()) * pursuit;
            }
        } else {
            // Target vanished or was claimed earlier this tick.
            self.target_food = None;
            self.turn_cooldown -= 1;
            if self.turn_cooldown <= 0 {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                self.vel = vec2(angle.cos(), angle.sin()) * self.speed;
                self.turn_cooldown =
                    rng.gen_range(config::TURN_COOLDOWN_MIN..=config::TURN_COOLDOWN_MAX);
            }
        }

        self.pos += self.vel;

        // Sign-flip only, no position clamp: a fish may render slightly
        // outside the tank for a tick until the flipped velocity pulls it
        // back. Clamping here would visibly change the motion.
        if self.pos.x < 0.0 || self.pos.x > tank.swim_right(self.size) {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > tank.swim_floor(self.size) {
            self.vel.y = -self.vel.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_fish(pos: Vec2) -> Fish {
        Fish {
            id: 0,
            pos,
            vel: vec2(0.5, 0.0),
            speed: 0.5,
            size: 30.0,
            color: WHITE,
            target_food: None,
            turn_cooldown: 100,
            animation_ticker: 0.0,
            tail_speed: 2.0,
        }
    }

    fn pellet(id: u64, x: f32, y: f32) -> Pellet {
        Pellet {
            id: FoodId(id),
            pos: vec2(x, y),
        }
    }

    #[test]
    fn no_food_in_range_keeps_target_none() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut fish = test_fish(vec2(100.0, 100.0));
        let far = [pellet(1, 100.0 + config::FISH_DETECTION_RADIUS + 1.0, 100.0)];

        let mut eaten = HashSet::new();
        fish.update(&far, &mut eaten, &tank, &mut rng);

        assert_eq!(fish.target_food, None);
        assert!(eaten.is_empty());
    }

    #[test]
    fn nearest_pellet_in_range_becomes_target_and_sets_pursuit_speed() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut fish = test_fish(vec2(100.0, 100.0));
        let pellets = [pellet(1, 180.0, 100.0), pellet(2, 140.0, 100.0)];

        let mut eaten = HashSet::new();
        fish.update(&pellets, &mut eaten, &tank, &mut rng);

        assert_eq!(fish.target_food, Some(FoodId(2)));
        let pursuit = fish.speed * config::FISH_ACCELERATION;
        assert!((fish.vel.length() - pursuit).abs() < 1e-4);
        // Heading straight at the pellet.
        assert!(fish.vel.x > 0.0);
        assert!(fish.vel.y.abs() < 1e-4);
    }

    #[test]
    fn pursuing_fish_does_not_retarget_to_closer_pellet() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut fish = test_fish(vec2(100.0, 100.0));
        fish.target_food = Some(FoodId(1));
        let pellets = [pellet(1, 180.0, 100.0), pellet(2, 120.0, 100.0)];

        let mut eaten = HashSet::new();
        fish.update(&pellets, &mut eaten, &tank, &mut rng);

        assert_eq!(fish.target_food, Some(FoodId(1)));
    }

    #[test]
    fn adjacent_pellet_is_detected_and_eaten_in_one_update() {
        let tank = Tank::new(500.0, 500.0);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut fish = test_fish(vec2(100.0, 100.0));
        let pellets = [pellet(7, 109.0, 100.0)];

        let mut eaten = HashSet::new();
        fish.update(&pellets, &mut eaten, &tank, &mut rng);

        assert!(eaten.contains(&FoodId(7)));
        assert_eq!(fish.target_food, None);
    }

    #[test]
    fn claimed_pellet_falls_back_to_wandering() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut fish = test_fish(vec2(100.0, 100.0));
        fish.target_food = Some(FoodId(1));
        fish.turn_cooldown = 5;
        let pellets = [pellet(1, 120.0, 100.0)];

        let mut eaten: HashSet<FoodId> = [FoodId(1)].into_iter().collect();
        fish.update(&pellets, &mut eaten, &tank, &mut rng);

        assert_eq!(fish.target_food, None);
        assert_eq!(fish.turn_cooldown, 4);
        // No second credit for an already-claimed pellet.
        assert_eq!(eaten.len(), 1);
    }

    #[test]
    fn expired_turn_cooldown_picks_new_heading_at_cruising_speed() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut fish = test_fish(vec2(500.0, 500.0));
        fish.turn_cooldown = 1;

        let mut eaten = HashSet::new();
        fish.update(&[], &mut eaten, &tank, &mut rng);

        assert!(
            fish.turn_cooldown >= config::TURN_COOLDOWN_MIN
                && fish.turn_cooldown <= config::TURN_COOLDOWN_MAX
        );
        assert!((fish.vel.length() - fish.speed).abs() < 1e-4);
    }

    #[test]
    fn unexpired_cooldown_leaves_velocity_unchanged() {
        let tank = Tank::new(1000.0, 1000.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut fish = test_fish(vec2(500.0, 500.0));
        let before = fish.vel;

        let mut eaten = HashSet::new();
        fish.update(&[], &mut eaten, &tank, &mut rng);

        assert_eq!(fish.vel, before);
        assert_eq!(fish.pos, vec2(500.0, 500.0) + before);
    }

    #[test]
    fn crossing_right_wall_flips_horizontal_velocity_without_clamping() {
        let tank = Tank::new(500.0, 500.0);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut fish = test_fish(vec2(tank.swim_right(30.0) - 0.1, 200.0));
        fish.vel = vec2(0.5, 0.0);

        let mut eaten = HashSet::new();
        fish.update(&[], &mut eaten, &tank, &mut rng);

        // Integration carried it past the wall; only the sign flipped.
        assert!(fish.pos.x > tank.swim_right(fish.size));
        assert!(fish.vel.x < 0.0);
    }

    #[test]
    fn crossing_sand_boundary_flips_vertical_velocity() {
        let tank = Tank::new(500.0, 500.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut fish = test_fish(vec2(200.0, tank.swim_floor(30.0) - 0.1));
        fish.vel = vec2(0.0, 0.5);

        let mut eaten = HashSet::new();
        fish.update(&[], &mut eaten, &tank, &mut rng);

        assert!(fish.pos.y > tank.swim_floor(fish.size));
        assert!(fish.vel.y < 0.0);
    }
}
