// All tunable simulation constants in one place.

// Fish
pub const NUM_FISH: usize = 15;
pub const FISH_SIZE_MIN: f32 = 25.0;
pub const FISH_SIZE_MAX: f32 = 50.0;
pub const FISH_SPEED_MIN: f32 = 0.3;
pub const FISH_SPEED_MAX: f32 = 0.9;
pub const FISH_ACCELERATION: f32 = 2.5;
pub const FISH_DETECTION_RADIUS: f32 = 200.0;
pub const FISH_EAT_RADIUS: f32 = 10.0;
pub const TURN_COOLDOWN_MIN: i32 = 200;
pub const TURN_COOLDOWN_MAX: i32 = 700;

// Food
pub const FOOD_SINK_SPEED: f32 = 1.0;

// Bubbles
pub const NUM_BUBBLES: usize = 25;
pub const BUBBLE_SPEED_MIN: f32 = 0.5;
pub const BUBBLE_SPEED_MAX: f32 = 2.0;
pub const BUBBLE_SIZE_MIN: f32 = 5.0;
pub const BUBBLE_SIZE_MAX: f32 = 25.0;
pub const BUBBLE_START_OFFSET: f32 = 50.0;

// Tank geometry
pub const SAND_HEIGHT: f32 = 80.0;
pub const SPAWN_INSET_X: f32 = 50.0;
pub const SPAWN_INSET_TOP: f32 = 50.0;
pub const SPAWN_INSET_BOTTOM: f32 = 100.0;
