pub const STORAGE_KEY: &str = "slot_machine_state_v1";

pub const STARTING_BALANCE: i64 = 200;
pub const WIN_DELTA: i64 = 100;
pub const LOSS_DELTA: i64 = -10;
pub const HISTORY_LIMIT: usize = 5;

// Animation timings, in milliseconds
pub const FLICKER_FRAMES: usize = 6;
pub const FLICKER_INTERVAL_MS: u32 = 90;
pub const SETTLE_DELAY_MS: u32 = 350;
