use macroquad::prelude::*;
use ::rand::Rng;

use crate::spawn;
use crate::tank::Tank;

/// One decorative bubble riding toward the surface.
#[derive(Clone, Debug)]
pub struct Bubble {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
}

/// Fixed-size recycling pool of bubbles. The count never changes: a
/// bubble that clears the top of the tank is re-rolled in place with the
/// same id and fresh random attributes.
pub struct BubbleField {
    bubbles: Vec<Bubble>,
}

impl BubbleField {
    pub fn new(count: usize, tank: &Tank, rng: &mut impl Rng) -> Self {
        let bubbles = (0..count as u32)
            .map(|id| spawn::spawn_bubble(id, tank, rng))
            .collect();
        Self { bubbles }
    }

    /// Rise every bubble by its own speed; recycle the ones fully above
    /// the visible top. Returns how many were recycled.
    pub fn update(&mut self, tank: &Tank, rng: &mut impl Rng) -> usize {
        let mut recycled = 0;
        for bubble in &mut self.bubbles {
            bubble.pos.y -= bubble.speed;
            if bubble.pos.y < -bubble.size {
                *bubble = spawn::spawn_bubble(bubble.id, tank, rng);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }
}
