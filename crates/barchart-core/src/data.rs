// File: crates/barchart-core/src/data.rs
// Summary: Input records, numeric coercion and the validated dataset handed to the scales.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// A value as it arrives in the literal input: a number or a numeric string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number. Strings are trimmed and an empty string reads as 0.
    pub fn coerce(&self) -> ChartResult<f64> {
        match self {
            RawValue::Number(v) => Ok(*v),
            RawValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return Ok(0.0);
                }
                match t.parse::<f64>() {
                    Ok(v) if !v.is_nan() => Ok(v),
                    _ => Err(ChartError::invalid_input(format!("value {s:?} is not a number"))),
                }
            }
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self { RawValue::Number(v) }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self { RawValue::Text(s.to_string()) }
}

/// Literal input row, before coercion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub team: String,
    pub value: RawValue,
}

impl RawRecord {
    pub fn new(team: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self { team: team.into(), value: value.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Record {
    pub category: String,
    pub value: f64,
}

impl Record {
    /// Construct a record enforcing a finite, non-negative value.
    pub fn try_new(category: impl Into<String>, value: f64) -> ChartResult<Self> {
        let category = category.into();
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::invalid_input(format!(
                "value for {category:?} must be finite and non-negative, got {value}"
            )));
        }
        Ok(Self { category, value })
    }
}

/// Ordered records; order is the display order of the category axis.
/// Contract: values finite and non-negative, categories unique. May be empty;
/// the scale constructors reject that case.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for r in &records {
            if !r.value.is_finite() || r.value < 0.0 {
                return Err(ChartError::invalid_input(format!(
                    "value for {:?} must be finite and non-negative, got {}",
                    r.category, r.value
                )));
            }
            if !seen.insert(r.category.as_str()) {
                return Err(ChartError::invalid_input(format!("duplicate category {:?}", r.category)));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.category.as_str())
    }

    /// Largest value, or `None` for an empty dataset.
    pub fn max_value(&self) -> Option<f64> {
        self.records.iter().map(|r| r.value).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

/// Coerce literal rows into a validated dataset, keeping their order.
pub fn coerce(raw: &[RawRecord]) -> ChartResult<Dataset> {
    let records = raw
        .iter()
        .map(|r| Record::try_new(r.team.clone(), r.value.coerce()?))
        .collect::<ChartResult<Vec<_>>>()?;
    Dataset::new(records)
}
