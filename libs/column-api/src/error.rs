use std::fmt;

/// Primitive shape a node was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Int32,
    Int64,
    String,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Int32 => f.write_str("int32"),
            Target::Int64 => f.write_str("int64"),
            Target::String => f.write_str("string"),
        }
    }
}

/// Node is present but can't be read as the requested primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionError {
    /// Wrong node type, e.g. a number where a string was expected.
    #[error("expected {expected}, got {found}")]
    Mismatch { expected: Target, found: &'static str },

    /// Right node type, but the value doesn't fit the target width.
    #[error("value {value} does not fit into {expected}")]
    OutOfRange { expected: Target, value: String },
}

impl CoercionError {
    /// The primitive shape that was requested.
    pub fn expected(&self) -> Target {
        match self {
            CoercionError::Mismatch { expected, .. } | CoercionError::OutOfRange { expected, .. } => {
                *expected
            }
        }
    }
}
