use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::node::Node;
use crate::stick::Stick;

/// Unique identifier for every part in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartId(pub Uuid);

impl PartId {
    /// Generate a new random part ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PartId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// A rigid line segment with a fixed orientation.
    Stick,
    /// A connector point with eight directional slots.
    Node,
}

impl PartKind {
    /// Lowercase name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stick => "stick",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything that can be placed in a world: a stick or a node.
///
/// The two kinds share grid coordinates and nothing else; no behavior is
/// dispatched through the common shape, so a plain sum type is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// A stick with its fixed position and orientation.
    Stick(Stick),
    /// A node with its connection slots.
    Node(Node),
}

impl Part {
    /// The part's unique ID.
    pub fn id(&self) -> PartId {
        match self {
            Self::Stick(stick) => stick.id(),
            Self::Node(node) => node.id(),
        }
    }

    /// Grid x coordinate.
    pub fn x(&self) -> i32 {
        match self {
            Self::Stick(stick) => stick.x(),
            Self::Node(node) => node.x(),
        }
    }

    /// Grid y coordinate.
    pub fn y(&self) -> i32 {
        match self {
            Self::Stick(stick) => stick.y(),
            Self::Node(node) => node.y(),
        }
    }

    /// The kind of this part.
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Stick(_) => PartKind::Stick,
            Self::Node(_) => PartKind::Node,
        }
    }

    /// Borrow as a stick, if this part is one.
    pub fn as_stick(&self) -> Option<&Stick> {
        match self {
            Self::Stick(stick) => Some(stick),
            Self::Node(_) => None,
        }
    }

    /// Borrow as a node, if this part is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Stick(_) => None,
            Self::Node(node) => Some(node),
        }
    }

    /// Mutably borrow as a node, if this part is one.
    pub fn as_node_mut(&mut self) -> Option<&mut Node> {
        match self {
            Self::Stick(_) => None,
            Self::Node(node) => Some(node),
        }
    }
}
