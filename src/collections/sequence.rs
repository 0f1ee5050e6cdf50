//! The integer array shown as bars and sorted in place

use crate::constants::{MAX_ARRAY_SIZE, RANDOM_VALUE_MAX, RANDOM_VALUE_MIN};
use crate::errors::VisualError;

/// Ordered, index-addressable array of integers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        Sequence { values }
    }

    /// Fill a fresh array of `size` values in `[RANDOM_VALUE_MIN, RANDOM_VALUE_MAX)`
    pub fn random(rng: &mut fastrand::Rng, size: usize) -> Result<Self, VisualError> {
        if size == 0 || size > MAX_ARRAY_SIZE {
            return Err(VisualError::invalid(format!(
                "array size must be between 1 and {}, got {}",
                MAX_ARRAY_SIZE, size
            )));
        }

        let values = (0..size)
            .map(|_| rng.i32(RANDOM_VALUE_MIN..RANDOM_VALUE_MAX))
            .collect();
        Ok(Sequence { values })
    }

    /// Parse a comma-separated list, dropping tokens that are not integers
    pub fn parse_custom(input: &str) -> Result<Self, VisualError> {
        let values: Vec<i32> = input
            .split(',')
            .filter_map(|token| token.trim().parse::<i32>().ok())
            .collect();

        if values.is_empty() {
            return Err(VisualError::invalid(
                "enter numbers separated by commas",
            ));
        }
        if values.len() > MAX_ARRAY_SIZE {
            return Err(VisualError::invalid(format!(
                "at most {} values are supported",
                MAX_ARRAY_SIZE
            )));
        }
        Ok(Sequence { values })
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check ascending order
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Sequence::new(values)
    }
}
