use std::{error::Error, fmt};

use crate::constants::{DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};

use super::{generator::Numbers, schedule::format_numbers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryError {
    WrongCount(usize),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::WrongCount(count) => write!(
                f,
                "expected {} distinct numbers between {} and {}, got {}",
                DRAW_SIZE, MIN_NUMBER, MAX_NUMBER, count
            ),
        }
    }
}

impl Error for EntryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry(Numbers);

impl Entry {
    /// Parses free-form input. Tokens that are not integers or fall outside
    /// `1..=99` are dropped, repeats collapse to their first occurrence.
    pub fn parse(input: &str) -> Result<Self, EntryError> {
        let mut picked: Vec<u8> = Vec::with_capacity(DRAW_SIZE);
        for token in input.split_whitespace() {
            let Ok(value) = token.parse::<i64>() else {
                continue;
            };
            let Ok(value) = u8::try_from(value) else {
                continue;
            };
            if (MIN_NUMBER..=MAX_NUMBER).contains(&value) && !picked.contains(&value) {
                picked.push(value);
            }
        }

        if picked.len() != DRAW_SIZE {
            return Err(EntryError::WrongCount(picked.len()));
        }

        picked.sort_unstable();
        let mut numbers = [0u8; DRAW_SIZE];
        numbers.copy_from_slice(&picked);
        Ok(Self(numbers))
    }

    pub const fn numbers(&self) -> &Numbers {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_numbers(&self.0))
    }
}
