// File: crates/barchart-core/src/geometry.rs
// Summary: Bar rectangles derived from records through the value and category scales.

use serde::Serialize;

use crate::data::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::scale::{BandScale, LinearScale};

/// One bar in inner-region pixel space, anchored at the left edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarGeometry {
    pub category: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// True when the vertical extents of the two bars intersect.
    pub fn overlaps_vertically(&self, other: &BarGeometry) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }
}

/// One bar per record, in dataset order.
pub fn encode_bars(
    dataset: &Dataset,
    value_scale: &LinearScale,
    category_scale: &BandScale,
) -> ChartResult<Vec<BarGeometry>> {
    dataset
        .iter()
        .map(|r| {
            if !category_scale.contains(&r.category) {
                return Err(ChartError::unknown_category(r.category.clone()));
            }
            Ok(BarGeometry {
                category: r.category.clone(),
                x: 0.0,
                y: category_scale.band_start(&r.category)?,
                width: value_scale.map(r.value),
                height: category_scale.bandwidth(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use crate::scale::{compute_category_scale, compute_value_scale};

    #[test]
    fn record_missing_from_band_domain_is_rejected() {
        let ds = Dataset::new(vec![Record::try_new("a", 1.0).unwrap(), Record::try_new("b", 2.0).unwrap()]).unwrap();
        let xs = compute_value_scale(&ds, 100.0).unwrap();
        let ys = BandScale::new(vec!["a".into()], (10.0, 0.0), 0.1).unwrap();
        assert_eq!(encode_bars(&ds, &xs, &ys), Err(ChartError::UnknownCategory("b".into())));
    }

    #[test]
    fn bars_do_not_overlap() {
        let ds = Dataset::new(
            (0..7).map(|i| Record::try_new(format!("c{i}"), i as f64).unwrap()).collect(),
        )
        .unwrap();
        let xs = compute_value_scale(&ds, 300.0).unwrap();
        let ys = compute_category_scale(&ds, 123.0, 0.25).unwrap();
        let bars = encode_bars(&ds, &xs, &ys).unwrap();
        for (i, a) in bars.iter().enumerate() {
            for b in &bars[i + 1..] {
                assert!(!a.overlaps_vertically(b), "{a:?} overlaps {b:?}");
            }
        }
    }
}
