pub const DEFAULT_SERVER_PORT: u16 = 1337;
pub const DEFAULT_DRAW_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_MAX_STEPS: usize = 20;

pub const DRAW_SIZE: usize = 6;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 99;
