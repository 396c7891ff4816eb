use std::fmt;

/// Reasons a sheet cannot be constructed.
///
/// Everything after construction is infallible: out-of-range detent indices
/// are clamped rather than reported.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetError {
    EmptyDetents,
    DetentOutOfRange { index: usize, value: f32 },
    DuplicateDetent { value: f32 },
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    InvalidViewport { height: f32 },
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::EmptyDetents => write!(f, "at least one detent ratio is required"),
            SheetError::DetentOutOfRange { index, value } => {
                write!(f, "detent {index} has ratio {value}; expected 0.0..=1.0")
            }
            SheetError::DuplicateDetent { value } => {
                write!(f, "detent ratio {value} appears more than once")
            }
            SheetError::InvalidConfig { field, reason } => {
                write!(f, "invalid sheet config `{field}`: {reason}")
            }
            SheetError::InvalidViewport { height } => {
                write!(f, "viewport height {height} must be positive and finite")
            }
        }
    }
}

impl std::error::Error for SheetError {}
