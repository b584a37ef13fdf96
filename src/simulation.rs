use std::collections::HashSet;

use ::rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bubble::{Bubble, BubbleField};
use crate::config;
use crate::fish::Fish;
use crate::food::{FoodField, FoodId, Pellet};
use crate::spawn;
use crate::tank::Tank;

/// Read-only copy of everything the renderer needs for one frame. Owned
/// data, so drawing can never observe a half-applied tick.
pub struct TankSnapshot {
    pub fish: Vec<Fish>,
    pub food: Vec<Pellet>,
    pub bubbles: Vec<Bubble>,
}

/// The whole aquarium. Owns all three collections exclusively; everything
/// mutates through `step`, `feed`/`add_food`, or a full rebuild on resize.
pub struct AquariumState {
    pub fish: Vec<Fish>,
    pub food: FoodField,
    pub bubbles: BubbleField,
    pub tank: Tank,
    pub rng: ChaCha8Rng,
    pub tick_count: u64,
    pub total_dropped: u64,
    pub total_eaten: u64,
    pub total_settled: u64,
    pub bubbles_recycled: u64,
    pub paused: bool,
}

impl AquariumState {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let tank = Tank::new(width, height);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let fish = (0..config::NUM_FISH as u32)
            .map(|id| spawn::spawn_fish(id, &tank, &mut rng))
            .collect();
        let bubbles = BubbleField::new(config::NUM_BUBBLES, &tank, &mut rng);

        Self {
            fish,
            food: FoodField::new(),
            bubbles,
            tank,
            rng,
            tick_count: 0,
            total_dropped: 0,
            total_eaten: 0,
            total_settled: 0,
            bubbles_recycled: 0,
            paused: false,
        }
    }

    /// One tick: fish in fixed collection order, then food, then bubbles.
    /// Timer-free, so a headless host may drive it at any cadence.
    pub fn step(&mut self) {
        // Transient per-tick claim set: the first fish to reach a pellet
        // eats it, later fish in the same tick see it as gone.
        let mut eaten: HashSet<FoodId> = HashSet::new();

        for fish in &mut self.fish {
            fish.update(self.food.pellets(), &mut eaten, &self.tank, &mut self.rng);
        }

        self.total_eaten += eaten.len() as u64;
        self.total_settled += self.food.update(&eaten, &self.tank) as u64;
        self.bubbles_recycled += self.bubbles.update(&self.tank, &mut self.rng) as u64;
        self.tick_count += 1;
    }

    /// Drop one pellet at the surface at a random x.
    pub fn feed(&mut self) -> FoodId {
        let x = spawn::random_feed_x(&self.tank, &mut self.rng);
        self.add_food(x)
    }

    /// Drop one pellet at the surface at the given x. Append-only, safe
    /// to call between ticks from input handling.
    pub fn add_food(&mut self, x: f32) -> FoodId {
        self.total_dropped += 1;
        self.food.add(x, &mut self.rng)
    }

    pub fn snapshot(&self) -> TankSnapshot {
        TankSnapshot {
            fish: self.fish.clone(),
            food: self.food.pellets().to_vec(),
            bubbles: self.bubbles.bubbles().to_vec(),
        }
    }
}
