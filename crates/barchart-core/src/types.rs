// File: crates/barchart-core/src/types.rs
// Summary: Canvas constants, margins and the chart configuration threaded through the pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Default outer surface width in pixels.
pub const OUTER_WIDTH: f64 = 600.0;
/// Default outer surface height in pixels.
pub const OUTER_HEIGHT: f64 = 300.0;
/// Fraction of each category slot left empty around its band.
pub const BAND_PADDING: f64 = 0.33;
/// Requested number of ticks on the value axis.
pub const VALUE_TICKS: usize = 5;

/// Space between the outer surface and the drawable region, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 20.0, 70.0, 40.0)
    }
}

/// Fixed geometry and axis settings for one chart instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub outer_width: f64,
    pub outer_height: f64,
    pub margins: Margins,
    pub band_padding: f64,
    pub value_ticks: usize,
    /// Draw category names next to the category axis ticks.
    pub category_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            outer_width: OUTER_WIDTH,
            outer_height: OUTER_HEIGHT,
            margins: Margins::default(),
            band_padding: BAND_PADDING,
            value_ticks: VALUE_TICKS,
            category_labels: false,
        }
    }
}

impl ChartConfig {
    /// Width of the drawable region inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.outer_width - self.margins.hsum()
    }

    /// Height of the drawable region inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.outer_height - self.margins.vsum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        let m = &self.margins;
        if [m.top, m.right, m.bottom, m.left].iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::invalid_input(format!("margins must be non-negative, got {m:?}")));
        }
        let (w, h) = (self.inner_width(), self.inner_height());
        if !(w.is_finite() && w > 0.0) || !(h.is_finite() && h > 0.0) {
            return Err(ChartError::invalid_input(format!(
                "inner region must be positive, got {w}x{h}"
            )));
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::invalid_input(format!(
                "band padding must lie in [0, 1), got {}",
                self.band_padding
            )));
        }
        Ok(())
    }
}
