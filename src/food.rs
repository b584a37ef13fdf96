use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config;
use crate::tank::Tank;

/// Unique id for a food pellet. Millisecond timestamp in the high bits
/// with a random low-bit disambiguator, so several pellets dropped within
/// the same tick (or the same millisecond) still get distinct ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FoodId(pub u64);

impl FoodId {
    fn fresh(rng: &mut impl Rng) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        FoodId((millis << 16) | rng.gen::<u16>() as u64)
    }
}

/// A sinking food pellet.
#[derive(Clone, Debug)]
pub struct Pellet {
    pub id: FoodId,
    pub pos: Vec2,
}

/// All active pellets in the tank. Pellets enter only through `add` (the
/// feed action) and leave by being eaten or settling into the sand.
pub struct FoodField {
    pellets: Vec<Pellet>,
}

impl FoodField {
    pub fn new() -> Self {
        Self {
            pellets: Vec::new(),
        }
    }

    /// Drop one pellet at the water surface. Callable at any time, not
    /// only between ticks; ids stay collision-resistant either way.
    pub fn add(&mut self, x: f32, rng: &mut impl Rng) -> FoodId {
        let id = FoodId::fresh(rng);
        self.pellets.push(Pellet {
            id,
            pos: vec2(x, 0.0),
        });
        id
    }

    /// Sink every surviving pellet and drop the ones eaten this tick or
    /// settled past the sand line. Returns how many settled.
    pub fn update(&mut self, eaten: &HashSet<FoodId>, tank: &Tank) -> usize {
        let sand_line = tank.sand_line();
        let mut settled = 0;
        self.pellets.retain_mut(|pellet| {
            if eaten.contains(&pellet.id) {
                return false;
            }
            pellet.pos.y += config::FOOD_SINK_SPEED;
            if pellet.pos.y >= sand_line {
                settled += 1;
                return false;
            }
            true
        });
        settled
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn len(&self) -> usize {
        self.pellets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pellets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn added_pellet_starts_at_surface() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut field = FoodField::new();
        field.add(120.0, &mut rng);
        assert_eq!(field.len(), 1);
        assert_eq!(field.pellets()[0].pos, vec2(120.0, 0.0));
    }

    #[test]
    fn ids_stay_distinct_within_one_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut field = FoodField::new();
        let ids: Vec<FoodId> = (0..10).map(|_| field.add(50.0, &mut rng)).collect();
        let unique: HashSet<FoodId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn pellet_settles_after_sinking_to_sand_line() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tank = Tank::new(500.0, 500.0);
        let mut field = FoodField::new();
        field.add(250.0, &mut rng);

        let none = HashSet::new();
        let ticks_to_sand = ((tank.sand_line()) / config::FOOD_SINK_SPEED).ceil() as usize;
        for _ in 0..ticks_to_sand - 1 {
            assert_eq!(field.update(&none, &tank), 0);
        }
        assert_eq!(field.len(), 1);
        assert_eq!(field.update(&none, &tank), 1);
        assert!(field.is_empty());
    }

    #[test]
    fn eaten_pellets_are_removed_before_sinking() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let tank = Tank::new(500.0, 500.0);
        let mut field = FoodField::new();
        let eaten_id = field.add(100.0, &mut rng);
        field.add(200.0, &mut rng);

        let eaten: HashSet<FoodId> = [eaten_id].into_iter().collect();
        field.update(&eaten, &tank);

        assert_eq!(field.len(), 1);
        assert_ne!(field.pellets()[0].id, eaten_id);
        // The survivor sank; the eaten one never moved.
        assert_eq!(field.pellets()[0].pos.y, config::FOOD_SINK_SPEED);
    }
}
