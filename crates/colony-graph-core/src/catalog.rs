//! Catalog lookups for names and commodity ordinals.
//!
//! Colony records only carry numeric identifiers. A [`Catalog`] resolves
//! them to display names and, for commodities, to the fixed ordinal that
//! drives color assignment. Implementations are read-only, so one catalog
//! can serve any number of colonies.
//!
//! [`StaticCatalog`] is an in-memory implementation that can be assembled in
//! code or deserialized from JSON:
//!
//! ```
//! use colony_graph_core::catalog::{Catalog, StaticCatalog};
//!
//! let catalog: StaticCatalog = serde_json::from_str(r#"{
//!     "types": { "2848": "Barren Extractor Control Unit" },
//!     "schematics": { "121": "Water" },
//!     "commodities": { "2268": { "name": "Aqueous Liquids", "uid": 1 } }
//! }"#).unwrap();
//!
//! assert_eq!(catalog.schematic_name(121).unwrap(), "Water");
//! assert_eq!(catalog.commodity(2268).unwrap().uid(), 1);
//! ```

use std::{collections::HashMap, fmt};

use serde::Deserialize;
use thiserror::Error;

use crate::identifier::{SchematicId, TypeId};

/// The kind of identifier a lookup was asked to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Type,
    Schematic,
    Commodity,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type"),
            Self::Schematic => write!(f, "schematic"),
            Self::Commodity => write!(f, "commodity"),
        }
    }
}

/// Errors raised by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown {kind} id {id}")]
    NotFound { kind: LookupKind, id: u32 },
}

impl CatalogError {
    /// Shorthand for a [`CatalogError::NotFound`] error.
    pub fn not_found(kind: LookupKind, id: u32) -> Self {
        Self::NotFound { kind, id }
    }
}

/// A commodity as known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commodity {
    name: String,
    uid: u32,
}

impl Commodity {
    /// Creates a commodity with its display name and fixed ordinal.
    pub fn new(name: impl Into<String>, uid: u32) -> Self {
        Self {
            name: name.into(),
            uid,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixed ordinal used for color assignment.
    pub fn uid(&self) -> u32 {
        self.uid
    }
}

/// Resolves catalog identifiers to names and commodity ordinals.
pub trait Catalog {
    /// Returns the display name of an item type.
    fn type_name(&self, type_id: TypeId) -> Result<String, CatalogError>;

    /// Returns the display name of a production schematic.
    fn schematic_name(&self, schematic_id: SchematicId) -> Result<String, CatalogError>;

    /// Returns the name and ordinal of a commodity type.
    fn commodity(&self, type_id: TypeId) -> Result<Commodity, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn type_name(&self, type_id: TypeId) -> Result<String, CatalogError> {
        (**self).type_name(type_id)
    }

    fn schematic_name(&self, schematic_id: SchematicId) -> Result<String, CatalogError> {
        (**self).schematic_name(schematic_id)
    }

    fn commodity(&self, type_id: TypeId) -> Result<Commodity, CatalogError> {
        (**self).commodity(type_id)
    }
}

/// In-memory catalog backed by lookup tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    types: HashMap<TypeId, String>,

    #[serde(default)]
    schematics: HashMap<SchematicId, String>,

    #[serde(default)]
    commodities: HashMap<TypeId, Commodity>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item type name.
    pub fn with_type(mut self, type_id: TypeId, name: impl Into<String>) -> Self {
        self.types.insert(type_id, name.into());
        self
    }

    /// Adds a schematic name.
    pub fn with_schematic(mut self, schematic_id: SchematicId, name: impl Into<String>) -> Self {
        self.schematics.insert(schematic_id, name.into());
        self
    }

    /// Adds a commodity.
    ///
    /// Commodities are item types too, so the name is also registered as a
    /// type name unless one is already present.
    pub fn with_commodity(mut self, type_id: TypeId, name: impl Into<String>, uid: u32) -> Self {
        let commodity = Commodity::new(name, uid);
        self.types
            .entry(type_id)
            .or_insert_with(|| commodity.name.clone());
        self.commodities.insert(type_id, commodity);
        self
    }

    /// Returns the number of entries across all tables.
    pub fn len(&self) -> usize {
        self.types.len() + self.schematics.len() + self.commodities.len()
    }

    /// Returns `true` if every table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for StaticCatalog {
    fn type_name(&self, type_id: TypeId) -> Result<String, CatalogError> {
        self.types
            .get(&type_id)
            .or_else(|| self.commodities.get(&type_id).map(|c| &c.name))
            .cloned()
            .ok_or_else(|| CatalogError::not_found(LookupKind::Type, type_id))
    }

    fn schematic_name(&self, schematic_id: SchematicId) -> Result<String, CatalogError> {
        self.schematics
            .get(&schematic_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(LookupKind::Schematic, schematic_id))
    }

    fn commodity(&self, type_id: TypeId) -> Result<Commodity, CatalogError> {
        self.commodities
            .get(&type_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(LookupKind::Commodity, type_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new()
            .with_type(2848, "Barren Extractor Control Unit")
            .with_schematic(121, "Water")
            .with_commodity(2268, "Aqueous Liquids", 1)
    }

    #[test]
    fn test_lookups_resolve() {
        let catalog = catalog();
        assert_eq!(
            catalog.type_name(2848).unwrap(),
            "Barren Extractor Control Unit"
        );
        assert_eq!(catalog.schematic_name(121).unwrap(), "Water");
        assert_eq!(
            catalog.commodity(2268).unwrap(),
            Commodity::new("Aqueous Liquids", 1)
        );
    }

    #[test]
    fn test_commodity_doubles_as_type_name() {
        assert_eq!(catalog().type_name(2268).unwrap(), "Aqueous Liquids");
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let catalog = catalog();
        assert_eq!(
            catalog.type_name(1),
            Err(CatalogError::not_found(LookupKind::Type, 1))
        );
        assert_eq!(
            catalog.schematic_name(2),
            Err(CatalogError::not_found(LookupKind::Schematic, 2))
        );
        assert_eq!(
            catalog.commodity(2848),
            Err(CatalogError::not_found(LookupKind::Commodity, 2848))
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found(LookupKind::Schematic, 7);
        assert_eq!(err.to_string(), "unknown schematic id 7");
    }

    #[test]
    fn test_catalog_through_reference() {
        let catalog = catalog();
        let by_ref: &dyn Catalog = &catalog;
        assert_eq!(by_ref.schematic_name(121).unwrap(), "Water");
        assert_eq!((&catalog).commodity(2268).unwrap().uid(), 1);
    }

    #[test]
    fn test_deserialize_partial_tables() {
        let catalog: StaticCatalog =
            serde_json::from_str(r#"{ "schematics": { "65": "Superconductors" } }"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.schematic_name(65).unwrap(), "Superconductors");
    }
}
