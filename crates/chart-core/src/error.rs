// File: crates/chart-core/src/error.rs
// Summary: Error type shared by renderers, datasets and axes.

use thiserror::Error;

/// Errors surfaced by the renderer family.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// The renderer needs a dataset capability (OHLC, interval) the dataset lacks.
    #[error("{renderer} requires a dataset with {capability} values")]
    UnsupportedDataset {
        renderer: &'static str,
        capability: &'static str,
    },
    /// A setter or constructor argument was rejected.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    #[error("series index {series} out of bounds (series count {count})")]
    SeriesOutOfBounds { series: usize, count: usize },
    #[error("item index {item} out of bounds for series {series} (item count {count})")]
    ItemOutOfBounds {
        series: usize,
        item: usize,
        count: usize,
    },
}

impl ChartError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        ChartError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
