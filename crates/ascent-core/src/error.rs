use thiserror::Error;

/// Problems found in declarative section metadata.
///
/// Generation fails fast on any of these; a half-valid layout could be unplayable.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MetadataError {
    #[error("section `{section}`: unknown section type `{section_type}`")]
    UnknownSectionType {
        section: String,
        section_type: String,
    },
    #[error("section `{section}`: missing property `{key}`")]
    MissingProperty { section: String, key: String },
    #[error("section `{section}`: property `{key}` is not a number (got `{value}`)")]
    MalformedProperty {
        section: String,
        key: String,
        value: String,
    },
    #[error("section `{section}`: property `{key}` must be finite (got `{value}`)")]
    NonFiniteProperty {
        section: String,
        key: String,
        value: String,
    },
    #[error("section `{section}`: property `{key}` must be non-negative (got {value})")]
    NegativeProperty {
        section: String,
        key: String,
        value: f32,
    },
    #[error("section `{section}`: {field} minimum {min} exceeds maximum {max}")]
    InvertedRange {
        section: String,
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("section `{section}`: step distance must be at least 1 (got {min})")]
    ZeroStepDistance { section: String, min: i32 },
    #[error(
        "section `{section}`: maximum step distance {max} exceeds the reachable gap of {limit} steps"
    )]
    UnreachableStepDistance { section: String, max: i32, limit: i32 },
    #[error("section `{section}`: property `{key}` must be at most 1 (got {value})")]
    FractionOutOfRange {
        section: String,
        key: String,
        value: f32,
    },
    #[error("section `{section}`: property `{key}` = {value} leaves no room inside {limit} units")]
    MovementRangeTooWide {
        section: String,
        key: String,
        value: f32,
        limit: f32,
    },
    #[error(
        "section `{section}`: jump boost sections need a minimum step range above {required} (got {min})"
    )]
    StepRangeTooShort {
        section: String,
        min: i32,
        required: i32,
    },
}
