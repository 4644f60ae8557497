//! Error types for colony graph construction.
//!
//! This module provides the main error type [`ColonyError`]. Every failure
//! aborts construction of the colony being built; no partial colony is ever
//! returned.

use std::fmt;

use thiserror::Error;

use colony_graph_core::{
    catalog::CatalogError,
    identifier::{PinId, TypeId},
};
use colony_graph_loader::{LoadError, ValidationError};

/// The main error type for colony graph construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColonyError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LoadError> for ColonyError {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::Validation(err) => Self::Validation(err),
            LoadError::Resolution { pin, source } => {
                Self::Resolution(ResolutionError::Pin { pin, source })
            }
        }
    }
}

/// A catalog lookup that could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("pin {pin}: {source}")]
    Pin {
        pin: PinId,
        #[source]
        source: CatalogError,
    },

    #[error("route content {content_type_id}: {source}")]
    Commodity {
        content_type_id: TypeId,
        #[source]
        source: CatalogError,
    },

    #[error("route content {content_type_id} has ordinal {uid}, expected 1..=83")]
    InvalidOrdinal { content_type_id: TypeId, uid: u32 },
}

/// The kind of edge that referenced a missing pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Link,
    Route,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link => write!(f, "link"),
            Self::Route => write!(f, "route"),
        }
    }
}

/// An edge whose endpoint is not a pin of the colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} {source_pin} -> {destination_pin} references unknown pin {missing}")]
pub struct IntegrityError {
    pub kind: EdgeKind,
    pub source_pin: PinId,
    pub destination_pin: PinId,
    pub missing: PinId,
}
