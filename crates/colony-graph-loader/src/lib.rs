//! Loader for planetary colony records.
//!
//! Turns the JSON colony records delivered by the colony service into
//! validated, fully resolved [`ColonyModel`]s. Loading runs in two stages:
//!
//! 1. [`parse_record`] / [`parse_records`] deserialize the raw shapes from
//!    [`record`].
//! 2. [`load`] validates a record and resolves every pin's names through a
//!    [`Catalog`].
//!
//! Route commodities are left unresolved here; the graph builder resolves
//! them while assigning colors.
//!
//! # Example
//!
//! ```
//! use colony_graph_core::catalog::StaticCatalog;
//!
//! let catalog = StaticCatalog::new().with_type(2524, "Barren Command Center");
//! let json = r#"{
//!     "last_update": "2017-06-03T09:05:07Z",
//!     "planet_type": "barren",
//!     "name": "Amarr VIII",
//!     "solar_system_id": 30002187,
//!     "upgrade_level": 4,
//!     "colony_layout": {
//!         "pins": [{ "pin_id": 1, "type_id": 2524, "latitude": 1.0, "longitude": 2.0 }],
//!         "links": [],
//!         "routes": []
//!     }
//! }"#;
//!
//! let record = colony_graph_loader::parse_record(json).unwrap();
//! let model = colony_graph_loader::load(&record, &catalog).unwrap();
//! assert_eq!(model.pins[0].type_name, "Barren Command Center");
//! ```

pub mod error;
pub mod record;
pub mod timestamp;

pub use error::{LoadError, ValidationError};

use indexmap::IndexMap;
use log::{debug, info, trace};

use colony_graph_core::{
    catalog::Catalog,
    identifier::PinId,
    semantic::{
        ColonyInfo, ColonyModel, Extraction, Link, Pin, PinRole, Route, Schematic,
    },
};

use record::{ColonyRecord, PinRecord};

/// Deserializes a single colony record.
///
/// # Errors
///
/// Returns [`ValidationError::Malformed`] if the JSON is invalid or a
/// required field is missing.
pub fn parse_record(json: &str) -> Result<ColonyRecord, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Deserializes a document holding one record or an array of records.
///
/// Records are deserialized independently, so one malformed record does not
/// hide the others. The outer error covers a document that is not JSON at
/// all.
///
/// # Errors
///
/// Returns [`ValidationError::Malformed`] if the document is not valid JSON.
pub fn parse_records(json: &str) -> Result<Vec<Result<ColonyRecord, LoadError>>, LoadError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    let values = match document {
        serde_json::Value::Array(values) => values,
        value => vec![value],
    };

    Ok(values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(LoadError::from))
        .collect())
}

/// Validates a record and resolves it into a [`ColonyModel`].
///
/// # Errors
///
/// Returns [`LoadError::Validation`] for malformed timestamps, duplicate
/// pin ids, non-finite coordinates, or links and routes without pins.
/// Returns [`LoadError::Resolution`] if the catalog does not know a pin's
/// type, schematic, or extractor product.
pub fn load(record: &ColonyRecord, catalog: &impl Catalog) -> Result<ColonyModel, LoadError> {
    info!(planet = record.name; "Loading colony");

    let info = colony_info(record)?;
    let layout = &record.colony_layout;

    if layout.pins.is_empty() && !(layout.links.is_empty() && layout.routes.is_empty()) {
        return Err(ValidationError::NoPins {
            links: layout.links.len(),
            routes: layout.routes.len(),
        }
        .into());
    }

    let mut pins: IndexMap<PinId, Pin> = IndexMap::with_capacity(layout.pins.len());
    for pin_record in &layout.pins {
        if pins.contains_key(&pin_record.pin_id) {
            return Err(ValidationError::DuplicatePin(pin_record.pin_id).into());
        }
        let pin = resolve_pin(pin_record, catalog)?;
        trace!(pin:?; "Resolved pin");
        pins.insert(pin.id, pin);
    }

    let links = layout
        .links
        .iter()
        .map(|link| Link {
            source: link.source_pin_id,
            destination: link.destination_pin_id,
            level: link.link_level,
        })
        .collect::<Vec<_>>();

    let routes = layout
        .routes
        .iter()
        .map(|route| Route {
            source: route.source_pin_id,
            destination: route.destination_pin_id,
            content_type_id: route.content_type_id,
        })
        .collect::<Vec<_>>();

    debug!(
        planet = info.planet_name,
        pins = pins.len(),
        links = links.len(),
        routes = routes.len();
        "Colony loaded"
    );

    Ok(ColonyModel {
        info,
        pins: pins.into_values().collect(),
        links,
        routes,
    })
}

fn colony_info(record: &ColonyRecord) -> Result<ColonyInfo, ValidationError> {
    let last_update = timestamp::parse_timestamp(&record.last_update)
        .ok_or_else(|| ValidationError::Timestamp(record.last_update.clone()))?;

    Ok(ColonyInfo {
        planet_name: record.name.clone(),
        planet_type: record.planet_type.clone(),
        solar_system_id: record.solar_system_id,
        command_center_upgrade_level: record.upgrade_level,
        last_update,
    })
}

fn resolve_pin(record: &PinRecord, catalog: &impl Catalog) -> Result<Pin, LoadError> {
    if !(record.latitude.is_finite() && record.longitude.is_finite()) {
        return Err(ValidationError::Coordinates(record.pin_id).into());
    }

    let resolution = LoadError::resolution;
    let type_name = catalog
        .type_name(record.type_id)
        .map_err(resolution(record.pin_id))?;

    let role = if let Some(details) = &record.extractor_details {
        let product_name = catalog
            .type_name(details.product_type_id)
            .map_err(resolution(record.pin_id))?;
        PinRole::Extractor(Extraction {
            product_type_id: details.product_type_id,
            product_name,
            qty_per_cycle: details.qty_per_cycle,
        })
    } else if let Some(schematic_id) = record.schematic_id {
        let name = catalog
            .schematic_name(schematic_id)
            .map_err(resolution(record.pin_id))?;
        PinRole::Processor(Schematic {
            id: schematic_id,
            name,
        })
    } else {
        PinRole::Plain
    };

    Ok(Pin {
        id: record.pin_id,
        type_id: record.type_id,
        type_name,
        latitude: record.latitude,
        longitude: record.longitude,
        role,
    })
}
