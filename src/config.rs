use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Print options for the textual representation of matrices and vectors.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// Fixed number of decimal places for floating-point elements.
    pub precision: Option<usize>,
    /// Rows kept at each end before the middle is elided.
    pub max_rows: Option<usize>,
    /// Columns (or vector coordinates) kept at each end before the middle is elided.
    pub max_cols: Option<usize>,
}

impl PrintOptions {
    pub fn new(precision: Option<usize>, max_rows: Option<usize>, max_cols: Option<usize>) -> Self {
        Self {
            precision,
            max_rows,
            max_cols,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub(crate) fn format_value<T: std::fmt::Debug>(&self, value: &T) -> String {
        match self.precision {
            Some(p) => format!("{:.*?}", p, value),
            None => format!("{:?}", value),
        }
    }
}

/// Indices to print for a sequence of `len` items. `None` marks the elided
/// middle, present only when `len > 2 * limit`.
pub(crate) fn visible_indices(len: usize, limit: Option<usize>) -> Vec<Option<usize>> {
    match limit {
        Some(n) if len > 2 * n => (0..n)
            .map(Some)
            .chain(std::iter::once(None))
            .chain((len - n..len).map(Some))
            .collect(),
        _ => (0..len).map(Some).collect(),
    }
}

impl FromStr for PrintOptions {
    type Err = String;

    /// Parses comma-separated `key=value` pairs, e.g. `precision=2,max_rows=3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut options = PrintOptions::default();
        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| format!("Expected key=value, got: {}", pair))?;
            let value: usize = value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid value for {}: {}", key.trim(), e))?;
            match key.trim().to_lowercase().as_str() {
                "precision" => options.precision = Some(value),
                "max_rows" => options.max_rows = Some(value),
                "max_cols" => options.max_cols = Some(value),
                other => return Err(format!("Unknown print option: {}", other)),
            }
        }
        Ok(options)
    }
}
