use thiserror::Error;

use crate::attribute::ElementKind;

/// Errors reported by the placement engine and the layout controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The pass was rejected before it started; no partial layout was
    /// published and any previous result is left untouched.
    #[error("invalid layout configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    /// Lookup of an attribute that the current layout does not contain.
    #[error("no {kind} laid out at index {index}")]
    NotFound { kind: ElementKind, index: usize },
}

/// The parameter that made a configuration unusable.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("column count must be at least 1")]
    NoColumns,
    #[error("column count {0} exceeds the supported maximum")]
    TooManyColumns(usize),
    #[error("padding must be a finite, non-negative value (got {0})")]
    Padding(f32),
    #[error("content width must be a finite, non-negative value (got {0})")]
    Width(f32),
}

impl From<ConfigIssue> for LayoutError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}
