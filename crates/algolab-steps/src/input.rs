//! Parsing and bounds checks for user-entered numbers.

use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Allowed element count for an array input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

/// Binary search arrays: at least one value, at most fifteen boxes.
pub const SEARCH_BOUNDS: Bounds = Bounds { min: 1, max: 15 };

/// Selection sort arrays: at least two values, at most twelve bars.
pub const SORT_BOUNDS: Bounds = Bounds { min: 2, max: 12 };

impl Bounds {
    pub fn check(&self, values: &[i64]) -> Result<()> {
        let got = values.len();
        if got < self.min {
            return Err(InputError::TooFew { min: self.min, got });
        }
        if got > self.max {
            return Err(InputError::TooMany { max: self.max, got });
        }
        Ok(())
    }
}

/// Parse a search target.
pub fn parse_target(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingTarget);
    }
    trimmed
        .parse()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))
}

/// Parse a comma-separated list of integers and check its length.
///
/// Blank tokens (from a trailing comma, say) are skipped. Any other token
/// that is not an integer rejects the whole input.
pub fn parse_array(raw: &str, bounds: Bounds) -> Result<Vec<i64>> {
    if raw.trim().is_empty() {
        return Err(InputError::MissingValues);
    }
    let values = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|_| InputError::InvalidList(token.to_string()))
        })
        .collect::<Result<Vec<i64>>>()?;
    bounds.check(&values)?;
    Ok(values)
}

/// An array supplied either as JSON numbers or as the raw text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumbersInput {
    Values(Vec<i64>),
    Text(String),
}

impl NumbersInput {
    pub fn resolve(&self, bounds: Bounds) -> Result<Vec<i64>> {
        match self {
            NumbersInput::Values(values) => {
                if values.is_empty() {
                    return Err(InputError::MissingValues);
                }
                bounds.check(values)?;
                Ok(values.clone())
            }
            NumbersInput::Text(raw) => parse_array(raw, bounds),
        }
    }
}

impl From<Vec<i64>> for NumbersInput {
    fn from(values: Vec<i64>) -> Self {
        NumbersInput::Values(values)
    }
}

/// A single number supplied either as JSON or as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Value(i64),
    Text(String),
}

impl ValueInput {
    pub fn resolve(&self) -> Result<i64> {
        match self {
            ValueInput::Value(value) => Ok(*value),
            ValueInput::Text(raw) => parse_target(raw),
        }
    }
}

impl From<i64> for ValueInput {
    fn from(value: i64) -> Self {
        ValueInput::Value(value)
    }
}
