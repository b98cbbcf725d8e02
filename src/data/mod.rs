//! Statistics dump decoding.
//!
//! The dump is kept as generic JSON; only the `overtime` branch is decoded
//! into typed series, and only for the categories a caller asks for.

mod dataset;

pub use dataset::{
    CategorySeriesMap, DEFAULT_INPUT_PATH, DEFAULT_SPECIES_KEYS, Dataset, OVERTIME_KEY, Overtime,
    Series,
};
