use std::fmt;

/// The three failure classes a replay can produce.
///
/// `Truncated` and `Protocol` are almost always fatal to the current
/// session; `VersionMismatch` means the asset/version catalogue and the
/// payload being interpreted disagree about what opcode or type a byte
/// means.
#[derive(Debug)]
pub enum ReplayError {
    /// The data reader ran out of bytes before satisfying a read.
    Truncated { context: String },
    /// The payload was structurally well-formed but semantically invalid.
    Protocol { context: String },
    /// The active version/feature matrix cannot make sense of the input.
    VersionMismatch { context: String },
}

impl ReplayError {
    pub fn truncated(context: impl Into<String>) -> Self {
        ReplayError::Truncated {
            context: context.into(),
        }
    }

    pub fn protocol(context: impl Into<String>) -> Self {
        ReplayError::Protocol {
            context: context.into(),
        }
    }

    pub fn version_mismatch(context: impl Into<String>) -> Self {
        ReplayError::VersionMismatch {
            context: context.into(),
        }
    }
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Truncated { context } => write!(f, "truncated input: {context}"),
            ReplayError::Protocol { context } => write!(f, "protocol violation: {context}"),
            ReplayError::VersionMismatch { context } => {
                write!(f, "version/asset mismatch: {context}")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

pub type Result<T> = std::result::Result<T, ReplayError>;
