// File: crates/barchart-core/src/sample.rs
// Summary: Built-in team dataset.

use crate::data::RawRecord;

/// Five teams and their scores, in display order.
pub fn teams() -> Vec<RawRecord> {
    vec![
        RawRecord::new("Boston", 100.0),
        RawRecord::new("Detroit", 85.0),
        RawRecord::new("New York", 80.0),
        RawRecord::new("Chicago", 75.0),
        RawRecord::new("Atlanta", 30.0),
    ]
}
