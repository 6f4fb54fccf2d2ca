//! Error types for rejected navigation requests and bad embedded data.

use thiserror::Error;

/// Why a camera request did not start.
///
/// None of these are fatal: the controller leaves its state untouched and
/// the caller is free to log and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("no camera preset named `{0}`")]
    UnknownPreset(String),

    #[error("camera is busy ({0})")]
    Busy(&'static str),

    #[error("camera has no current target to orbit")]
    NoTarget,

    #[error("tour playlist is empty")]
    EmptyTour,
}

/// Failure to load one of the embedded data tables.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("failed to parse {name}: {message}")]
    Parse { name: &'static str, message: String },

    #[error("duplicate entry `{key}` in {name}")]
    Duplicate { name: &'static str, key: String },

    #[error("tour entry `{0}` has no camera preset")]
    UnknownTourStop(String),

    #[error("body `{0}` must come after its parent")]
    ParentOrder(String),
}

impl CatalogError {
    pub(crate) fn parse(name: &'static str, err: impl std::fmt::Display) -> Self {
        CatalogError::Parse {
            name,
            message: err.to_string(),
        }
    }
}
