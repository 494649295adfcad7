// Tick rate
pub const TICK_RATE: u32 = 30;
pub const FRAME_TIME: f32 = 1.0 / TICK_RATE as f32;

// Fighter body collision box (width x height), centered on the position
pub const BODY_WIDTH: f32 = 0.928;
pub const BODY_HEIGHT: f32 = 1.024;

// Moving platform
pub const PLATFORM_WIDTH: f32 = 1.8;

// Combat-state code reported while a fighter is winding up an attack
pub const STATE_ATTACKING: i32 = 8;

// Item spawners exposed by the observation layer
pub const SPAWNER_COUNT: usize = 4;

// Control vector
pub const CONTROL_SIZE: usize = 10;
