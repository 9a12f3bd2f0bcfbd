//! Crate-level error types.

use std::fmt;

/// Why a named-part lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartNotFoundReason {
    /// The clock model has not finished loading.
    SceneNotLoaded,
    /// The identifier has no framing preset.
    UnknownPart,
    /// A preset exists but the loaded model has no node of that name.
    MissingNode,
}

impl fmt::Display for PartNotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SceneNotLoaded => f.write_str("scene not loaded"),
            Self::UnknownPart => f.write_str("no preset for this part"),
            Self::MissingNode => f.write_str("no scene node with this name"),
        }
    }
}

/// Errors produced by the clockview crate.
#[derive(Debug)]
pub enum ClockError {
    /// Named-part framing failed. Camera state is left untouched.
    PartNotFound {
        /// The identifier that was requested.
        part: String,
        /// Which stage of the lookup failed.
        reason: PartNotFoundReason,
    },
    /// The clock asset failed to load. The controller stays unloaded.
    AssetLoad(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl ClockError {
    pub(crate) fn part_not_found(
        part: impl Into<String>,
        reason: PartNotFoundReason,
    ) -> Self {
        Self::PartNotFound {
            part: part.into(),
            reason,
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PartNotFound { part, reason } => {
                write!(f, "part not found: {part:?} ({reason})")
            }
            Self::AssetLoad(msg) => write!(f, "asset load error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClockError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_not_found_display_names_part_and_reason() {
        let err = ClockError::part_not_found(
            "gear_hours",
            PartNotFoundReason::SceneNotLoaded,
        );
        assert_eq!(
            err.to_string(),
            "part not found: \"gear_hours\" (scene not loaded)"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err: ClockError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(ClockError::AssetLoad("bad json".into()).source().is_none());
    }
}
