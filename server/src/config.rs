use lib::constants::{DEFAULT_DRAW_INTERVAL_MS, DEFAULT_MAX_STEPS};

use crate::error::BoxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub interval_ms: u64,
    pub max_steps: usize,
    pub global_seed: Option<u64>,
    pub reward: String,
    pub disconnect_on_win: bool,
}

impl ServerConfig {
    pub fn new(reward: impl Into<String>) -> Self {
        Self {
            interval_ms: DEFAULT_DRAW_INTERVAL_MS,
            max_steps: DEFAULT_MAX_STEPS,
            global_seed: None,
            reward: reward.into(),
            disconnect_on_win: false,
        }
    }

    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    #[must_use]
    pub const fn with_global_seed(mut self, global_seed: u64) -> Self {
        self.global_seed = Some(global_seed);
        self
    }

    #[must_use]
    pub const fn with_disconnect_on_win(mut self, disconnect_on_win: bool) -> Self {
        self.disconnect_on_win = disconnect_on_win;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), BoxError> {
        if self.interval_ms == 0 {
            return Err("draw interval must be at least 1ms".into());
        }
        if self.max_steps == 0 {
            return Err("generator step cap must be at least 1".into());
        }
        Ok(())
    }
}
