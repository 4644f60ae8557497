//! Pin nodes and their display attributes.

use colony_graph_core::{
    color::Color,
    geometry::PositionHint,
    identifier::{PinId, TypeId},
    semantic::{Extraction, Pin, PinRole, Schematic, is_advanced_processor},
};

use crate::config::GraphStyle;

/// Drawing shape of a pin node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinShape {
    /// Extractor control unit.
    Extractor,
    /// Processor whose type name marks it as advanced.
    SchematicAdvanced,
    /// Any other processor.
    SchematicStandard,
    /// Pin without a recipe or extraction program.
    Plain,
}

impl PinShape {
    /// Classifies a pin.
    ///
    /// Extraction is checked first. Processors are split by the
    /// [`is_advanced_processor`] naming heuristic on the resolved type name.
    pub fn for_pin(pin: &Pin) -> Self {
        match &pin.role {
            PinRole::Extractor(_) => Self::Extractor,
            PinRole::Processor(_) if is_advanced_processor(&pin.type_name) => {
                Self::SchematicAdvanced
            }
            PinRole::Processor(_) => Self::SchematicStandard,
            PinRole::Plain => Self::Plain,
        }
    }

    /// Returns the conventional renderer name of this shape.
    pub fn render_name(self) -> &'static str {
        match self {
            Self::Extractor => "trapezium",
            Self::SchematicAdvanced => "doubleoctagon",
            Self::SchematicStandard => "octagon",
            Self::Plain => "rectangle",
        }
    }
}

/// Fill and font of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    fill_color: Color,
    font_name: String,
}

impl NodeStyle {
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }
}

/// A pin as it appears in the link and route graphs.
#[derive(Debug, Clone, PartialEq)]
pub struct PinNode {
    pin_id: PinId,
    type_id: TypeId,
    label: String,
    shape: PinShape,
    position: PositionHint,
    role: PinRole,
    style: NodeStyle,
}

impl PinNode {
    /// Builds the node for `pin`, scaling its surface position by `scale`.
    pub(crate) fn from_pin(pin: &Pin, scale: f64, style: &GraphStyle) -> Self {
        Self {
            pin_id: pin.id,
            type_id: pin.type_id,
            label: pin.type_name.clone(),
            shape: PinShape::for_pin(pin),
            position: PositionHint::from_surface(pin.latitude, pin.longitude, scale),
            role: pin.role.clone(),
            style: NodeStyle {
                fill_color: style.node_color(),
                font_name: style.font_name().to_string(),
            },
        }
    }

    pub fn pin_id(&self) -> PinId {
        self.pin_id
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the display label, the resolved type name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the label with one word per line.
    pub fn wrapped_label(&self) -> String {
        self.label.replace(' ', "\n")
    }

    pub fn shape(&self) -> PinShape {
        self.shape
    }

    pub fn position(&self) -> PositionHint {
        self.position
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Returns the schematic this pin processes, if any.
    pub fn schematic(&self) -> Option<&Schematic> {
        self.role.schematic()
    }

    /// Returns the extraction program of this pin, if any.
    pub fn extraction(&self) -> Option<&Extraction> {
        self.role.extraction()
    }
}
