use crate::config;

/// Tank bounds. The visible area spans `width` x `height`; the bottom
/// `SAND_HEIGHT` pixels are the sand strip that fish stay above and food
/// settles into.
pub struct Tank {
    pub width: f32,
    pub height: f32,
}

impl Tank {
    /// A zero or negative dimension is a configuration error; fail fast
    /// rather than clamp.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "tank dimensions must be positive, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Y coordinate where sinking food settles and is removed.
    pub fn sand_line(&self) -> f32 {
        self.height - config::SAND_HEIGHT
    }

    /// Lower Y limit for a fish of the given size (keeps it above the sand).
    pub fn swim_floor(&self, size: f32) -> f32 {
        self.height - size - config::SAND_HEIGHT
    }

    /// Right X limit for a fish of the given size.
    pub fn swim_right(&self, size: f32) -> f32 {
        self.width - size
    }
}
