// File: crates/barchart-core/src/error.rs
// Summary: Error kinds raised while coercing data and computing chart geometry.

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Empty dataset, non-positive dimensions, non-numeric or negative value,
    /// duplicate category, or a padding fraction outside `[0, 1)`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Geometry requested for a category the band scale does not know.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

impl ChartError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory(category.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(ChartError::invalid_input("x").to_string().starts_with("invalid input:"));
        assert_eq!(
            ChartError::unknown_category("Denver").to_string(),
            "unknown category: \"Denver\""
        );
    }
}
