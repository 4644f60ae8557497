//! Normalized colony entities.
//!
//! These types are produced by the loader once every identifier in a colony
//! record has been resolved against a catalog. They own resolved names and
//! are immutable from the graph builder's point of view.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::identifier::{PinId, SchematicId, TypeId};

/// Marker carried by the resolved type name of advanced processors.
pub const ADVANCED_PROCESSOR_MARKER: &str = "Advanced";

/// Marker carried by the resolved type name of high-tier processors.
pub const HIGH_TIER_PROCESSOR_MARKER: &str = "High-Tech";

/// Returns `true` if a display name denotes an advanced processor.
///
/// This is a naming heuristic over catalog display names. It only selects a
/// drawing shape.
pub fn is_advanced_processor(label: &str) -> bool {
    label.contains(ADVANCED_PROCESSOR_MARKER)
}

/// Returns `true` if a display name denotes a high-tier processor.
///
/// This is a naming heuristic over catalog display names. High-tier
/// processors are left out of rank grouping.
pub fn is_high_tier_processor(label: &str) -> bool {
    label.contains(HIGH_TIER_PROCESSOR_MARKER)
}

/// Planet-level metadata of a colony.
#[derive(Debug, Clone, PartialEq)]
pub struct ColonyInfo {
    pub planet_name: String,
    pub planet_type: String,
    pub solar_system_id: u32,
    pub command_center_upgrade_level: u8,
    pub last_update: DateTime<Utc>,
}

impl ColonyInfo {
    /// Returns `last_update` in the record form, `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn last_update_string(&self) -> String {
        self.last_update.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// The schematic a processor runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schematic {
    pub id: SchematicId,
    pub name: String,
}

/// Output of an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub product_type_id: TypeId,
    pub product_name: String,
    pub qty_per_cycle: u32,
}

/// What a pin does.
///
/// A pin has exactly one role. Extraction details take precedence over a
/// schematic when a record carries both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PinRole {
    /// Storage, launchpad, command center, or any other pin without a recipe.
    #[default]
    Plain,
    /// A processor running a schematic.
    Processor(Schematic),
    /// An extractor head controller.
    Extractor(Extraction),
}

impl PinRole {
    /// Returns the schematic if this is a processor.
    pub fn schematic(&self) -> Option<&Schematic> {
        match self {
            Self::Processor(schematic) => Some(schematic),
            _ => None,
        }
    }

    /// Returns the extraction details if this is an extractor.
    pub fn extraction(&self) -> Option<&Extraction> {
        match self {
            Self::Extractor(extraction) => Some(extraction),
            _ => None,
        }
    }
}

/// An installation on the colony surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: PinId,
    pub type_id: TypeId,
    pub type_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub role: PinRole,
}

/// An undirected physical link between two pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub source: PinId,
    pub destination: PinId,
    pub level: u8,
}

/// A directed flow of one commodity between two pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub source: PinId,
    pub destination: PinId,
    pub content_type_id: TypeId,
}

/// A fully resolved colony, ready for graph construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ColonyModel {
    pub info: ColonyInfo,
    pub pins: Vec<Pin>,
    pub links: Vec<Link>,
    pub routes: Vec<Route>,
}
