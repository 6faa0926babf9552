//! Menu node variants
//!
//! Every entry on the display is a [`Node`]: a label, the node that held
//! focus before it, and one of a closed set of variants. Behaviour that
//! needs the rest of the menu (focus moves, rendering other nodes) lives in
//! [`crate::router`]; the variants here only own their value logic.

pub mod action;
pub mod container;
pub mod list;
pub mod value;

pub use action::Action;
pub use container::{Container, Window, MAX_CHILDREN};
pub use list::{ListItems, RotaryList, MAX_LIST_ITEMS};
pub use value::{BoolValue, DropDownList, FloatValue, LongValue};

use dualmenu_display::glyph;

use crate::format::Label;

/// Maximum nodes in one menu system
pub const MAX_NODES: usize = 32;

/// Handle to a node in the menu arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(u8);

impl NodeId {
    pub(crate) const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Position in the arena
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Node type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NodeType {
    Container,
    Action,
    BoolValue,
    LongValue,
    FloatValue,
    DropDownListValue,
    RotaryListValue,
}

impl NodeType {
    /// Glyph shown at the right of the row when selected
    pub fn indicator(self) -> char {
        match self {
            NodeType::Container => glyph::ENTER,
            NodeType::Action => glyph::ACTION,
            NodeType::RotaryListValue => glyph::ROTATE,
            NodeType::BoolValue
            | NodeType::LongValue
            | NodeType::FloatValue
            | NodeType::DropDownListValue => glyph::EDIT,
        }
    }
}

/// Variant payload
pub enum NodeKind<'a, D> {
    Container(Container),
    Action(Action<D>),
    Bool(BoolValue<'a>),
    Long(LongValue<'a>),
    Float(FloatValue<'a>),
    DropDown(DropDownList<'a>),
    Rotary(RotaryList<'a>),
}

impl<D> NodeKind<'_, D> {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Container(_) => NodeType::Container,
            NodeKind::Action(_) => NodeType::Action,
            NodeKind::Bool(_) => NodeType::BoolValue,
            NodeKind::Long(_) => NodeType::LongValue,
            NodeKind::Float(_) => NodeType::FloatValue,
            NodeKind::DropDown(_) => NodeType::DropDownListValue,
            NodeKind::Rotary(_) => NodeType::RotaryListValue,
        }
    }
}

/// A menu entry
pub struct Node<'a, D> {
    pub(crate) label: Label,
    /// Node that held focus when this one took it; not an owner
    pub(crate) previous: Option<NodeId>,
    pub(crate) kind: NodeKind<'a, D>,
}

impl<'a, D> Node<'a, D> {
    pub(crate) fn new(label: &str, kind: NodeKind<'a, D>) -> Self {
        Self {
            label: Label::new(label),
            previous: None,
            kind,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }
}
