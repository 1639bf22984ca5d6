// File: crates/barchart-core/src/scale.rs
// Summary: Linear (value -> pixel) and band (category -> pixel band) scales.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::Dataset;
use crate::error::{ChartError, ChartResult};

/// Value scale mapping `[0, domain_max]` onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    domain_max: f64,
    range: (f64, f64),
}

impl LinearScale {
    /// Contract: `domain_max` finite and non-negative, range endpoints finite.
    pub fn new(domain_max: f64, range: (f64, f64)) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(ChartError::invalid_input(format!(
                "domain max must be finite and non-negative, got {domain_max}"
            )));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::invalid_input(format!("range must be finite, got {range:?}")));
        }
        Ok(Self { domain_max, range })
    }

    #[inline]
    pub fn map(&self, value: f64) -> f64 {
        // An all-zero domain collapses every value onto the range start.
        if self.domain_max == 0.0 {
            return self.range.0;
        }
        let mut t = value / self.domain_max;
        // Keep positive values off the origin when the ratio underflows.
        if value > 0.0 && t == 0.0 {
            t = f64::MIN_POSITIVE;
        }
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    pub fn domain(&self) -> (f64, f64) { (0.0, self.domain_max) }
    pub fn domain_max(&self) -> f64 { self.domain_max }
    pub fn range(&self) -> (f64, f64) { self.range }
}

/// Category scale splitting a pixel range into equal slots, one per key, each
/// holding a band centred between `padding / 2` gaps.
///
/// A reversed range (`r0 > r1`) assigns the first key to the slot nearest `r0`.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        if domain.is_empty() {
            return Err(ChartError::invalid_input("band scale needs at least one category"));
        }
        let extent = (range.1 - range.0).abs();
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChartError::invalid_input(format!("band range must have positive extent, got {range:?}")));
        }
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::invalid_input(format!("padding must lie in [0, 1), got {padding}")));
        }
        let mut index = HashMap::with_capacity(domain.len());
        for (i, key) in domain.iter().enumerate() {
            if index.insert(key.clone(), i).is_some() {
                return Err(ChartError::invalid_input(format!("duplicate category {key:?}")));
            }
        }
        let step = extent / domain.len() as f64;
        let bandwidth = step * (1.0 - padding);
        Ok(Self { domain, index, range, padding, step, bandwidth })
    }

    pub fn domain(&self) -> &[String] { &self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }
    pub fn padding(&self) -> f64 { self.padding }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
    /// Width of one slot, band plus its share of padding.
    pub fn step(&self) -> f64 { self.step }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    /// Low edge of the slot at domain position `i`.
    fn slot_start(&self, i: usize) -> f64 {
        let (r0, r1) = self.range;
        if r1 < r0 {
            r1 + self.step * (self.domain.len() - 1 - i) as f64
        } else {
            r0 + self.step * i as f64
        }
    }

    /// Low edge of the band drawn for `category`.
    pub fn band_start(&self, category: &str) -> ChartResult<f64> {
        let i = *self
            .index
            .get(category)
            .ok_or_else(|| ChartError::unknown_category(category))?;
        Ok(self.slot_start(i) + self.step * self.padding * 0.5)
    }

    pub fn band_center(&self, category: &str) -> ChartResult<f64> {
        Ok(self.band_start(category)? + self.bandwidth * 0.5)
    }

    /// Key and band start at domain position `i`.
    pub fn band_at(&self, i: usize) -> Option<(&str, f64)> {
        let key = self.domain.get(i)?;
        Some((key.as_str(), self.slot_start(i) + self.step * self.padding * 0.5))
    }

    /// `(key, band_start, bandwidth)` for every key, in domain order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        (0..self.domain.len()).filter_map(move |i| self.band_at(i)).map(move |(k, s)| (k, s, self.bandwidth))
    }
}

/// Value scale for `dataset`: domain `[0, max value]`, range `[0, width]`.
pub fn compute_value_scale(dataset: &Dataset, width: f64) -> ChartResult<LinearScale> {
    let domain_max = dataset
        .max_value()
        .ok_or_else(|| ChartError::invalid_input("cannot scale an empty dataset"))?;
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::invalid_input(format!("width must be positive, got {width}")));
    }
    let scale = LinearScale::new(domain_max, (0.0, width))?;
    tracing::debug!(domain_max, width, "computed value scale");
    Ok(scale)
}

/// Category scale for `dataset` over `[height, 0]`, so the first record sits at the bottom.
pub fn compute_category_scale(dataset: &Dataset, height: f64, padding: f64) -> ChartResult<BandScale> {
    if !height.is_finite() || height <= 0.0 {
        return Err(ChartError::invalid_input(format!("height must be positive, got {height}")));
    }
    let domain = dataset.categories().map(str::to_string).collect();
    let scale = BandScale::new(domain, (height, 0.0), padding)?;
    tracing::debug!(
        categories = scale.len(),
        step = scale.step(),
        bandwidth = scale.bandwidth(),
        "computed category scale"
    );
    Ok(scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;

    fn dataset(values: &[(&str, f64)]) -> Dataset {
        let records = values.iter().map(|(c, v)| Record::try_new(*c, *v).unwrap()).collect();
        Dataset::new(records).unwrap()
    }

    #[test]
    fn linear_maps_max_to_full_width() {
        let s = compute_value_scale(&dataset(&[("a", 50.0), ("b", 100.0)]), 540.0).unwrap();
        assert_eq!(s.domain(), (0.0, 100.0));
        assert_eq!(s.map(100.0), 540.0);
        assert_eq!(s.map(50.0), 270.0);
        assert_eq!(s.map(0.0), 0.0);
    }

    #[test]
    fn tiny_positive_value_keeps_nonzero_width() {
        let s = compute_value_scale(&dataset(&[("a", 1e300), ("b", 1e-300)]), 540.0).unwrap();
        let w = s.map(1e-300);
        assert!(w > 0.0 && w < 1e-300, "width {w}");
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(1e300), 540.0);
    }

    #[test]
    fn zero_domain_maps_to_range_start() {
        let s = compute_value_scale(&dataset(&[("a", 0.0), ("b", 0.0)]), 100.0).unwrap();
        assert_eq!(s.domain_max(), 0.0);
        assert_eq!(s.map(0.0), 0.0);
    }

    #[test]
    fn value_scale_rejects_bad_width_and_empty_data() {
        let ds = dataset(&[("a", 1.0)]);
        assert!(matches!(compute_value_scale(&ds, 0.0), Err(ChartError::InvalidInput(_))));
        assert!(matches!(compute_value_scale(&ds, -3.0), Err(ChartError::InvalidInput(_))));
        assert!(matches!(compute_value_scale(&Dataset::default(), 10.0), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn forward_band_range_places_first_key_at_start() {
        let s = BandScale::new(vec!["a".into(), "b".into()], (0.0, 100.0), 0.5).unwrap();
        assert_eq!(s.step(), 50.0);
        assert_eq!(s.bandwidth(), 25.0);
        assert_eq!(s.band_start("a").unwrap(), 12.5);
        assert_eq!(s.band_start("b").unwrap(), 62.5);
    }

    #[test]
    fn reversed_band_range_places_first_key_at_bottom() {
        let s = BandScale::new(vec!["a".into(), "b".into()], (100.0, 0.0), 0.0).unwrap();
        assert_eq!(s.band_start("a").unwrap(), 50.0);
        assert_eq!(s.band_start("b").unwrap(), 0.0);
        assert_eq!(s.band_center("b").unwrap(), 25.0);
    }

    #[test]
    fn band_scale_validates_inputs() {
        let ds = dataset(&[("a", 1.0)]);
        assert!(compute_category_scale(&ds, 0.0, 0.3).is_err());
        assert!(compute_category_scale(&ds, 10.0, 1.0).is_err());
        assert!(compute_category_scale(&ds, 10.0, -0.1).is_err());
        assert!(compute_category_scale(&Dataset::default(), 10.0, 0.3).is_err());
        assert!(BandScale::new(vec!["a".into(), "a".into()], (0.0, 1.0), 0.0).is_err());
    }

    #[test]
    fn unknown_key_is_reported() {
        let s = compute_category_scale(&dataset(&[("a", 1.0)]), 10.0, 0.2).unwrap();
        assert_eq!(s.band_start("zzz"), Err(ChartError::UnknownCategory("zzz".into())));
    }

    #[test]
    fn single_category_is_padded_symmetrically() {
        let s = compute_category_scale(&dataset(&[("only", 4.0)]), 100.0, 0.2).unwrap();
        let start = s.band_start("only").unwrap();
        assert!((start - 10.0).abs() < 1e-12);
        assert!((s.bandwidth() - 80.0).abs() < 1e-12);
        assert!((100.0 - (start + s.bandwidth()) - start).abs() < 1e-12);
    }
}
