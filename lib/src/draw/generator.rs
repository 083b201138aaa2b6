use std::{error::Error, fmt};

use crate::constants::{DRAW_SIZE, MAX_NUMBER};

pub type Numbers = [u8; DRAW_SIZE];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    Degenerate { steps: usize, collected: Vec<u8> },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Degenerate { steps, collected } => write!(
                f,
                "generator degenerated after {} steps with only {} distinct numbers {:?}",
                steps,
                collected.len(),
                collected
            ),
        }
    }
}

impl Error for GeneratorError {}

pub fn generate(seed: u128, max_steps: usize) -> Result<Numbers, GeneratorError> {
    let modulus = f64::from(MAX_NUMBER);
    // Rounding of the double working value is part of the sequence.
    let mut working = seed as f64;
    let mut collected: Vec<u8> = Vec::with_capacity(DRAW_SIZE);
    let mut steps = 0;

    while collected.len() < DRAW_SIZE {
        if steps >= max_steps || !working.is_finite() {
            return Err(GeneratorError::Degenerate { steps, collected });
        }
        steps += 1;

        let a = (working % modulus) + 1.0;
        let number = a as u8;
        if !collected.contains(&number) {
            collected.push(number);
            if collected.len() == DRAW_SIZE {
                break;
            }
        }

        working = (working / a).floor() * (modulus + 1.0 - a);
    }

    let mut numbers = [0u8; DRAW_SIZE];
    numbers.copy_from_slice(&collected);
    Ok(numbers)
}
