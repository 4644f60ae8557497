//! Raw colony record shapes, as delivered by the colony service.
//!
//! Fields the loader does not use are ignored during deserialization.

use serde::Deserialize;

use colony_graph_core::identifier::{PinId, SchematicId, TypeId};

/// One colony as received, before validation and name resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColonyRecord {
    pub last_update: String,
    pub planet_type: String,
    pub name: String,
    pub solar_system_id: u32,
    pub upgrade_level: u8,
    pub colony_layout: LayoutRecord,
}

/// The installations and connections of a colony.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayoutRecord {
    pub pins: Vec<PinRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PinRecord {
    pub pin_id: PinId,
    pub type_id: TypeId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub schematic_id: Option<SchematicId>,
    #[serde(default)]
    pub extractor_details: Option<ExtractorDetailsRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractorDetailsRecord {
    pub product_type_id: TypeId,
    pub qty_per_cycle: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LinkRecord {
    pub source_pin_id: PinId,
    pub destination_pin_id: PinId,
    pub link_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RouteRecord {
    pub source_pin_id: PinId,
    pub destination_pin_id: PinId,
    pub content_type_id: TypeId,
}
