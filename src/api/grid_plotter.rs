use tracing::{debug, trace};

use crate::data::{CategorySeriesMap, DEFAULT_SPECIES_KEYS, Dataset};
use crate::error::GridResult;

use super::{Figure, PlotterConfig};

/// Lays out `overtime` series as a grid: species keys are rows, subkeys are
/// columns in document order.
#[derive(Debug, Clone, Default)]
pub struct GridPlotter {
    config: PlotterConfig,
}

impl GridPlotter {
    #[must_use]
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Builds the figure for `species_keys`.
    ///
    /// Categories outside `species_keys` are skipped without being decoded.
    /// Species keys absent from the dataset leave their row empty. A subkey
    /// whose column falls outside a fixed-width grid fails the whole run.
    pub fn plot<S: AsRef<str>>(
        &self,
        dataset: &Dataset,
        species_keys: &[S],
    ) -> GridResult<Figure> {
        let overtime = dataset.overtime()?;

        let mut retained: Vec<(usize, &str, CategorySeriesMap)> = Vec::new();
        for category in overtime.categories() {
            let Some(row) = species_keys.iter().position(|key| key.as_ref() == category) else {
                debug!(category, "skipping category outside species keys");
                continue;
            };
            if let Some(series_map) = overtime.category(category)? {
                retained.push((row, category, series_map));
            }
        }

        let widest = retained
            .iter()
            .map(|(_, _, series_map)| series_map.len())
            .max()
            .unwrap_or(0);
        let rows = species_keys.len();
        let cols = self.config.column_policy.resolve(widest);
        debug!(rows, cols, categories = retained.len(), "creating subplot grid");

        let mut figure = Figure::new(rows, cols);
        for (row, category, series_map) in &retained {
            for (col, (subkey, series)) in series_map.iter().enumerate() {
                trace!(
                    row = *row,
                    col,
                    category = *category,
                    subkey = subkey.as_str(),
                    samples = series.len(),
                    "plot series"
                );
                let subplot = figure.subplot_mut(*row, col)?;
                subplot.draw(series, self.config.series_kind);
                subplot.set_title(format!("{category}, {subkey}"));
                subplot.set_x_min(self.config.x_min);
            }
        }

        Ok(figure)
    }

    /// Builds the figure for the default `animal` / `plant` rows.
    pub fn plot_default_species(&self, dataset: &Dataset) -> GridResult<Figure> {
        self.plot(dataset, &DEFAULT_SPECIES_KEYS)
    }
}

/// Plots `dataset` with the default configuration and species keys.
pub fn plot_overtime(dataset: &Dataset) -> GridResult<Figure> {
    GridPlotter::default().plot_default_species(dataset)
}
