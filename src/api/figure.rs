use serde::{Deserialize, Serialize};

use crate::core::{AxisLimits, DataPoint, HistogramBin, unit_width_bins};
use crate::error::{GridError, GridResult};

use super::SeriesKind;

/// One cell of a figure.
///
/// A subplot is populated once a series has been drawn into it. Only the x
/// lower bound can be pinned; everything else is autoscaled from the data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subplot {
    title: Option<String>,
    series: Option<Vec<f64>>,
    kind: SeriesKind,
    x_min: Option<f64>,
}

impl Subplot {
    /// Draws `values` as a connected line against positions `0, 1, 2, ...`.
    pub fn plot(&mut self, values: &[f64]) {
        self.draw(values, SeriesKind::Line);
    }

    /// Draws unit-width bin counts of `values`.
    pub fn hist(&mut self, values: &[f64]) {
        self.draw(values, SeriesKind::Histogram);
    }

    pub fn draw(&mut self, values: &[f64], kind: SeriesKind) {
        self.series = Some(values.to_vec());
        self.kind = kind;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_x_min(&mut self, x_min: f64) {
        self.x_min = Some(x_min);
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn series(&self) -> Option<&[f64]> {
        self.series.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn requested_x_min(&self) -> Option<f64> {
        self.x_min
    }

    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.series.is_some()
    }

    #[must_use]
    pub fn points(&self) -> Vec<DataPoint> {
        self.series.as_deref().map(DataPoint::indexed).unwrap_or_default()
    }

    /// Unit-width bins of the series; fails when the value range is too
    /// wide to bin.
    pub fn bins(&self) -> GridResult<Vec<HistogramBin>> {
        match self.series.as_deref() {
            Some(values) => unit_width_bins(values),
            None => Ok(Vec::new()),
        }
    }

    /// Autoscaled x range with the requested lower bound applied.
    pub fn x_limits(&self) -> GridResult<AxisLimits> {
        let auto = match self.kind {
            SeriesKind::Line => {
                let len = self.series.as_ref().map_or(0, Vec::len);
                AxisLimits::autoscale((0..len).map(|index| index as f64))
            }
            SeriesKind::Histogram => AxisLimits::autoscale(
                self.bins()?
                    .iter()
                    .flat_map(|bin| [bin.start, bin.end])
                    .collect::<Vec<_>>(),
            ),
        };
        Ok(auto.with_lower_bound(self.x_min))
    }

    /// Autoscaled y range; histogram counts always start at zero.
    pub fn y_limits(&self) -> GridResult<AxisLimits> {
        let limits = match self.kind {
            SeriesKind::Line => {
                AxisLimits::autoscale(self.series.iter().flatten().copied())
            }
            SeriesKind::Histogram => {
                let counts = self.bins()?.iter().map(|bin| bin.count as f64).collect::<Vec<_>>();
                AxisLimits::autoscale(counts.into_iter().chain([0.0])).with_lower_bound(Some(0.0))
            }
        };
        Ok(limits)
    }
}

/// Row-major grid of subplots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    rows: usize,
    cols: usize,
    cells: Vec<Subplot>,
}

impl Figure {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Subplot::default(); rows.saturating_mul(cols)],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn subplot(&self, row: usize, col: usize) -> GridResult<&Subplot> {
        let index = self.cell_index(row, col)?;
        Ok(&self.cells[index])
    }

    pub fn subplot_mut(&mut self, row: usize, col: usize) -> GridResult<&mut Subplot> {
        let index = self.cell_index(row, col)?;
        Ok(&mut self.cells[index])
    }

    /// All cells with their `(row, col)` position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Subplot)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, subplot)| (index / cols, index % cols, subplot))
    }

    /// Populated cells with their `(row, col)` position, row-major.
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, &Subplot)> {
        self.cells().filter(|(_, _, subplot)| subplot.is_populated())
    }

    #[must_use]
    pub fn populated_count(&self) -> usize {
        self.cells.iter().filter(|subplot| subplot.is_populated()).count()
    }

    /// Titles of populated cells, row-major.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.populated()
            .filter_map(|(_, _, subplot)| subplot.title())
            .collect()
    }

    fn cell_index(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::SubplotOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
