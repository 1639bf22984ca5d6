// File: crates/barchart-core/src/chart.rs
// Summary: One-pass encoding pipeline: coerce -> scales -> bars -> axis ticks.

use serde::Serialize;

use crate::axis::AxisDescriptor;
use crate::data::{coerce, Dataset, RawRecord};
use crate::error::ChartResult;
use crate::geometry::{encode_bars, BarGeometry};
use crate::scale::{compute_category_scale, compute_value_scale};
use crate::types::ChartConfig;

/// Horizontal bar chart encoder bound to one configuration.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    pub config: ChartConfig,
}

/// Renderable primitives for one chart, in inner-region pixel space.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EncodedChart {
    pub config: ChartConfig,
    pub bars: Vec<BarGeometry>,
    pub value_axis: AxisDescriptor,
    pub category_axis: AxisDescriptor,
}

impl BarChart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Coerce the literal rows and encode them. Either every primitive is
    /// produced or the first error is returned.
    #[tracing::instrument(skip_all, fields(records = raw.len()))]
    pub fn encode(&self, raw: &[RawRecord]) -> ChartResult<EncodedChart> {
        let dataset = coerce(raw)?;
        self.encode_dataset(&dataset)
    }

    pub fn encode_dataset(&self, dataset: &Dataset) -> ChartResult<EncodedChart> {
        let cfg = &self.config;
        cfg.validate()?;

        let x = compute_value_scale(dataset, cfg.inner_width())?;
        let y = compute_category_scale(dataset, cfg.inner_height(), cfg.band_padding)?;
        let bars = encode_bars(dataset, &x, &y)?;
        let value_axis = AxisDescriptor::value(&x, cfg.value_ticks);
        let category_axis = AxisDescriptor::category(&y, cfg.category_labels);

        tracing::debug!(
            bars = bars.len(),
            value_ticks = value_axis.ticks.len(),
            "encoded bar chart"
        );
        Ok(EncodedChart { config: cfg.clone(), bars, value_axis, category_axis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;

    #[test]
    fn empty_input_fails_without_partial_output() {
        let err = BarChart::default().encode(&[]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn invalid_config_is_reported_before_scaling() {
        let chart = BarChart::new(ChartConfig { band_padding: 1.5, ..ChartConfig::default() });
        let err = chart.encode(&[RawRecord::new("a", 1.0)]).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(msg) if msg.contains("padding")));
    }
}
