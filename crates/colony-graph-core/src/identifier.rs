//! Identifier types for colony entities.
//!
//! Pins are addressed by the numeric identifier the colony record assigns
//! them. The [`PinId`] newtype keeps those identifiers from being mixed up
//! with type, schematic, or commodity identifiers, which stay plain integers
//! through the [`TypeId`] and [`SchematicId`] aliases.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Catalog identifier of an item type (installations and commodities).
pub type TypeId = u32;

/// Catalog identifier of a production schematic.
pub type SchematicId = u32;

/// Identifier of a pin, unique within its owning colony.
///
/// # Examples
///
/// ```
/// use colony_graph_core::identifier::PinId;
///
/// let id = PinId::new(1_019_312_845);
/// assert_eq!(id.get(), 1_019_312_845);
/// assert_eq!(id.to_string(), "1019312845");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct PinId(u64);

impl PinId {
    /// Creates a `PinId` from its raw numeric value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PinId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl FromStr for PinId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}
