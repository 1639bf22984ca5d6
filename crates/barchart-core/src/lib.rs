// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart encoding API.

pub mod axis;
pub mod chart;
pub mod data;
pub mod error;
pub mod geometry;
pub mod sample;
pub mod scale;
pub mod types;

pub use axis::{category_ticks, value_ticks, AxisDescriptor, AxisOrient, Tick};
pub use chart::{BarChart, EncodedChart};
pub use data::{coerce, Dataset, RawRecord, RawValue, Record};
pub use error::{ChartError, ChartResult};
pub use geometry::{encode_bars, BarGeometry};
pub use scale::{compute_category_scale, compute_value_scale, BandScale, LinearScale};
pub use types::{ChartConfig, Margins};
