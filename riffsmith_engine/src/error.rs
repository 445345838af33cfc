// Errors surfaced by the generation pipeline.
//
// Only malformed bar ranges are errors. Out-of-range density and velocity
// are clamped where they are used, and unknown role names resolve through
// `Role::from_name`, so neither reaches this type.

/// Error type for note generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid bar range: barsEnd ({bars_end}) is before barsStart ({bars_start})")]
    InvalidRange { bars_start: i32, bars_end: i32 },
}
