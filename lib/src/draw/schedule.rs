use chrono::Utc;

use crate::constants::DRAW_SIZE;

use super::generator::Numbers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalSeed(u64);

impl GlobalSeed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn generate(interval_ms: u64) -> Self {
        Self(rand::random_range(1..=interval_ms.max(1)))
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    boundary_ms: u64,
    seed: u128,
    generation_order: Numbers,
    canonical_order: Numbers,
}

impl Draw {
    pub fn new(boundary_ms: u64, seed: u128, generation_order: Numbers) -> Self {
        let mut canonical_order = generation_order;
        canonical_order.sort_unstable();
        Self {
            boundary_ms,
            seed,
            generation_order,
            canonical_order,
        }
    }

    pub const fn boundary_ms(&self) -> u64 {
        self.boundary_ms
    }

    pub const fn seed(&self) -> u128 {
        self.seed
    }

    pub const fn generation_order(&self) -> &Numbers {
        &self.generation_order
    }

    pub const fn canonical_order(&self) -> &Numbers {
        &self.canonical_order
    }
}

pub fn compute_next_boundary(now_ms: u64, interval_ms: u64) -> u64 {
    let interval_ms = interval_ms.max(1);
    let mut boundary = now_ms.div_ceil(interval_ms) * interval_ms;
    while (boundary - now_ms) * 2 < interval_ms {
        boundary += interval_ms;
    }
    boundary
}

pub fn derive_seed(boundary_ms: u64, global_seed: GlobalSeed) -> u128 {
    reverse_decimal_digits(u128::from(boundary_ms) + u128::from(global_seed.value()))
}

pub fn reverse_decimal_digits(mut value: u128) -> u128 {
    let mut reversed = 0u128;
    while value > 0 {
        reversed = reversed * 10 + value % 10;
        value /= 10;
    }
    reversed
}

pub fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

pub fn format_numbers(numbers: &[u8]) -> String {
    let mut out = String::with_capacity(DRAW_SIZE * 3);
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&n.to_string());
    }
    out
}
