use thiserror::Error;

/// Errors produced while parsing a dependency expression.
///
/// Version strings themselves never fail to parse; see [`crate::Version::parse`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid dependency expression: {input:?}")]
    InvalidDependency { input: String },

    #[error("dependency {input:?} has a comparison operator but no version")]
    MissingVersion { input: String },

    #[error("unknown comparison operator {0:?}")]
    UnknownOperator(String),
}
