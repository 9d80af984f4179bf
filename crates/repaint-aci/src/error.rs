//! Error types for ACI recoloring.

use repaint_core::CoreError;
use std::fmt;
use thiserror::Error;

/// Result type for recoloring.
pub type AciResult<T> = Result<T, AciError>;

/// Precondition failures of the recolor transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AciError {
    /// ACI and XYS buffers differ in length.
    #[error("buffer length mismatch: ACI has {aci} samples, XYS has {xys}")]
    LengthMismatch {
        /// ACI sample count
        aci: usize,
        /// XYS sample count
        xys: usize,
    },

    /// ACI and XYS textures differ in size.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Which of a material's two maps an operation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// Ambient color intensity map
    Aci,
    /// Auxiliary XYS map
    Xys,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aci => f.write_str("ACI"),
            Self::Xys => f.write_str("XYS"),
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure while recoloring one material.
#[derive(Debug, Error)]
pub enum ColorizeError {
    /// A readable snapshot of the map could not be obtained.
    #[error("couldn't get readable {map} map: {source}")]
    Snapshot {
        /// Map that failed
        map: MapKind,
        /// Underlying source error
        #[source]
        source: BoxError,
    },

    /// The replacement ACI map could not be uploaded.
    #[error("couldn't upload replacement ACI map: {0}")]
    Upload(#[source] BoxError),

    /// The transform rejected its inputs.
    #[error(transparent)]
    Recolor(#[from] AciError),
}

impl ColorizeError {
    pub(crate) fn snapshot<E>(map: MapKind, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Snapshot {
            map,
            source: Box::new(err),
        }
    }

    pub(crate) fn upload<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Upload(Box::new(err))
    }
}
