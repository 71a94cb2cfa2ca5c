//! Crate-level error types.

use std::fmt;

/// Errors produced by the volo crate.
///
/// The per-frame flight and collision update never fails; only loading
/// configuration, loading scene layouts and running the viewer do.
#[derive(Debug)]
pub enum VoloError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// TOML scene layout parsing failure.
    SceneParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for VoloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SceneParse(msg) => write!(f, "scene parse error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for VoloError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VoloError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
