//! Error types for colony loading.
//!
//! Loading fails in one of two ways: the record itself is malformed
//! ([`ValidationError`]), or an identifier in it is unknown to the catalog
//! ([`LoadError::Resolution`]). Neither is retried.

use thiserror::Error;

use colony_graph_core::{catalog::CatalogError, identifier::PinId};

/// Ways a colony record can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed colony record: {0}")]
    Malformed(String),

    #[error("invalid last_update timestamp '{0}', expected YYYY-MM-DDTHH:MM:SSZ")]
    Timestamp(String),

    #[error("pin id {0} appears more than once")]
    DuplicatePin(PinId),

    #[error("pin {0} has non-finite coordinates")]
    Coordinates(PinId),

    #[error("colony has {links} links and {routes} routes but no pins")]
    NoPins { links: usize, routes: usize },
}

/// The error type for colony loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cannot resolve pin {pin}: {source}")]
    Resolution {
        pin: PinId,
        #[source]
        source: CatalogError,
    },
}

impl LoadError {
    pub(crate) fn resolution(pin: PinId) -> impl FnOnce(CatalogError) -> Self {
        move |source| Self::Resolution { pin, source }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Malformed(err.to_string()).into()
    }
}
