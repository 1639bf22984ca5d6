// File: crates/barchart-core/src/axis.rs
// Summary: Axis descriptors and the tick generators for value and category axes.

use serde::Serialize;

use crate::scale::{BandScale, LinearScale};

/// Relative slack used when counting ticks that land on the domain end.
const TICK_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// A reference mark along an axis, in inner-region pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Everything a renderer needs to draw one axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisDescriptor {
    pub orient: AxisOrient,
    /// Pixel extent of the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl AxisDescriptor {
    pub fn value(scale: &LinearScale, desired: usize) -> Self {
        Self { orient: AxisOrient::Bottom, range: scale.range(), ticks: value_ticks(scale, desired).collect() }
    }

    pub fn category(scale: &BandScale, show_labels: bool) -> Self {
        Self { orient: AxisOrient::Left, range: scale.range(), ticks: category_ticks(scale, show_labels).collect() }
    }
}

/// Step of the form `mant * 10^exp` with `mant` in {1, 2, 5}.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NiceStep {
    mant: u8,
    exp: i32,
}

impl NiceStep {
    /// Smallest nice step not below `raw`. Contract: `raw` finite and positive.
    fn at_least(raw: f64) -> Self {
        let exp = raw.log10().floor() as i32;
        let mant = raw / Self { mant: 1, exp }.value();
        if mant <= 1.0 + TICK_EPSILON {
            Self { mant: 1, exp }
        } else if mant <= 2.0 + TICK_EPSILON {
            Self { mant: 2, exp }
        } else if mant <= 5.0 + TICK_EPSILON {
            Self { mant: 5, exp }
        } else {
            Self { mant: 1, exp: exp + 1 }
        }
    }

    fn next(self) -> Self {
        match self.mant {
            1 => Self { mant: 2, ..self },
            2 => Self { mant: 5, ..self },
            _ => Self { mant: 1, exp: self.exp + 1 },
        }
    }

    /// `i * step`, computed so decimal steps stay exact (3 * 0.1 == 0.3).
    fn multiple(&self, i: usize) -> f64 {
        let m = i as f64 * self.mant as f64;
        if self.exp >= 0 {
            m * 10f64.powi(self.exp)
        } else {
            m / 10f64.powi(-self.exp)
        }
    }

    fn value(&self) -> f64 {
        self.multiple(1)
    }

    /// Fraction digits needed to print every multiple of the step.
    fn decimals(&self) -> usize {
        (-self.exp).max(0) as usize
    }

    /// Number of multiples (including 0) inside `[0, max]`, or `None` when
    /// the step itself is not a usable positive number.
    fn count_within(&self, max: f64) -> Option<usize> {
        let step = self.value();
        if !(step.is_finite() && step > 0.0) {
            return None;
        }
        let n = (max / step * (1.0 + TICK_EPSILON)).floor();
        if !n.is_finite() || n >= usize::MAX as f64 {
            return None;
        }
        (n as usize).checked_add(1)
    }
}

/// Value axis ticks: restartable, finite, at most `desired` long.
#[derive(Clone, Debug)]
pub struct ValueTicks {
    scale: LinearScale,
    step: Option<NiceStep>,
    index: usize,
    count: usize,
}

impl Iterator for ValueTicks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.index >= self.count {
            return None;
        }
        let i = self.index;
        self.index += 1;
        let (value, label) = match self.step {
            Some(step) => {
                let v = step.multiple(i);
                (v, format!("{:.*}", step.decimals(), v))
            }
            None => (0.0, "0".to_string()),
        };
        Some(Tick { position: self.scale.map(value), label })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ValueTicks {}

/// Evenly spaced ticks over `[0, domain_max]` with a 1/2/5 x 10^k step,
/// choosing the finest step that keeps the count within `desired`.
pub fn value_ticks(scale: &LinearScale, desired: usize) -> ValueTicks {
    let max = scale.domain_max();
    let (step, count) = if desired == 0 {
        (None, 0)
    } else if max == 0.0 {
        (None, 1)
    } else {
        // Steps below the normal range cannot be built from powers of ten.
        let mut step = NiceStep::at_least((max / desired as f64).max(f64::MIN_POSITIVE));
        loop {
            match step.count_within(max) {
                // A lone origin tick prints as plain "0" whatever the step.
                Some(1) => break (None, 1),
                Some(n) if n <= desired => break (Some(step), n),
                Some(_) => step = step.next(),
                // Only the origin survives a step that overflows.
                None => break (None, 1),
            }
        }
    };
    ValueTicks { scale: *scale, step, index: 0, count }
}

/// Category axis ticks: one per key at its band centre.
#[derive(Clone, Debug)]
pub struct CategoryTicks<'a> {
    scale: &'a BandScale,
    show_labels: bool,
    index: usize,
}

impl Iterator for CategoryTicks<'_> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let (key, start) = self.scale.band_at(self.index)?;
        self.index += 1;
        let label = if self.show_labels { key.to_string() } else { String::new() };
        Some(Tick { position: start + self.scale.bandwidth() * 0.5, label })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.scale.len() - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CategoryTicks<'_> {}

pub fn category_ticks(scale: &BandScale, show_labels: bool) -> CategoryTicks<'_> {
    CategoryTicks { scale, show_labels, index: 0 }
}
