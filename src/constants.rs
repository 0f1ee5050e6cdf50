// Constants shared by the collections, the control surface and the CLI

/// Largest array `generate_random` accepts
pub const MAX_ARRAY_SIZE: usize = 100;

/// Array size used when none is given
pub const DEFAULT_ARRAY_SIZE: usize = 10;

/// Random values are drawn from `[RANDOM_VALUE_MIN, RANDOM_VALUE_MAX)`
pub const RANDOM_VALUE_MIN: i32 = 10;
pub const RANDOM_VALUE_MAX: i32 = 310;

/// Speed slider bounds; pacing is `PACING_BASE_MS - speed * PACING_STEP_MS`
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 6;
pub const PACING_BASE_MS: u64 = 1100;
pub const PACING_STEP_MS: u64 = 100;
