use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{GridError, GridResult};

/// Top-level key holding the per-category time series.
pub const OVERTIME_KEY: &str = "overtime";

/// Categories plotted by default, in row order.
pub const DEFAULT_SPECIES_KEYS: [&str; 2] = ["animal", "plant"];

/// File read by the command-line tool when no input is given.
pub const DEFAULT_INPUT_PATH: &str = "test.json";

/// Ordered numeric samples of one subkey.
pub type Series = Vec<f64>;

/// Subkey to series, in document order.
pub type CategorySeriesMap = IndexMap<String, Series>;

/// A decoded statistics dump: top-level key to arbitrary JSON, in document
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    entries: IndexMap<String, Value>,
}

impl Dataset {
    #[must_use]
    pub fn new(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }

    pub fn from_json_str(input: &str) -> GridResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> GridResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn load(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| GridError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_slice(&bytes)?;
        debug!(
            path = %path.display(),
            bytes = bytes.len(),
            keys = dataset.entries.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Borrowed view of the `overtime` mapping.
    pub fn overtime(&self) -> GridResult<Overtime<'_>> {
        let value = self
            .entries
            .get(OVERTIME_KEY)
            .ok_or_else(|| GridError::MissingKey(OVERTIME_KEY.to_owned()))?;
        let categories = value.as_object().ok_or_else(|| {
            GridError::InvalidData(format!(
                "`{OVERTIME_KEY}` must be an object, found {}",
                json_kind(value)
            ))
        })?;
        Ok(Overtime { categories })
    }
}

/// Category name to raw JSON, in document order.
///
/// Categories are decoded lazily so shapes the plotter ignores (such as a
/// flat population array) never fail a run.
#[derive(Debug, Clone, Copy)]
pub struct Overtime<'a> {
    categories: &'a Map<String, Value>,
}

impl<'a> Overtime<'a> {
    pub fn categories(self) -> impl Iterator<Item = &'a str> {
        self.categories.keys().map(String::as_str)
    }

    /// Decodes one category as subkey -> series. `Ok(None)` when absent.
    pub fn category(&self, category: &str) -> GridResult<Option<CategorySeriesMap>> {
        let Some(value) = self.categories.get(category) else {
            return Ok(None);
        };
        CategorySeriesMap::deserialize(value)
            .map(Some)
            .map_err(|err| {
                GridError::InvalidData(format!(
                    "category `{category}` must map subkeys to number arrays: {err}"
                ))
            })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
