use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SwError, SwResult};
use crate::part::PartId;

/// The four orientations a stick can take on the grid.
///
/// The numeric indices are part of the public surface: callers that read
/// orientations from external input go through [`Orientation::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Upright, drawn `|`. Fits attachments straight above or below a node.
    Vertical = 0,
    /// Rising diagonal, drawn `/`. Fits attachments to the northeast or
    /// southwest.
    DiagonalAscending = 1,
    /// Flat, drawn `-`. Fits attachments straight east or west.
    Horizontal = 2,
    /// Falling diagonal, drawn `\`. Fits attachments to the southeast or
    /// northwest.
    DiagonalDescending = 3,
}

impl Orientation {
    /// Parse an orientation from its index.
    ///
    /// Indices 0 through 3 map to vertical, diagonal ascending, horizontal,
    /// and diagonal descending. Anything else fails with
    /// [`SwError::InvalidOrientation`].
    pub fn from_index(index: u8) -> SwResult<Self> {
        match index {
            0 => Ok(Self::Vertical),
            1 => Ok(Self::DiagonalAscending),
            2 => Ok(Self::Horizontal),
            3 => Ok(Self::DiagonalDescending),
            other => Err(SwError::InvalidOrientation(other)),
        }
    }

    /// The index this orientation parses from.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// The glyph used when drawing a stick with this orientation.
    pub fn glyph(&self) -> char {
        match self {
            Self::Vertical => '|',
            Self::DiagonalAscending => '/',
            Self::Horizontal => '-',
            Self::DiagonalDescending => '\\',
        }
    }

    /// Lowercase name, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::DiagonalAscending => "diagonal ascending",
            Self::Horizontal => "horizontal",
            Self::DiagonalDescending => "diagonal descending",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rigid line segment placed on the grid.
///
/// Position and orientation are fixed at construction. A stick is a plain
/// value; nodes that connect to it hold its [`PartId`], never the stick
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stick {
    id: PartId,
    x: i32,
    y: i32,
    orientation: Orientation,
}

impl Stick {
    /// Create a new stick with a random ID.
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self::with_id(PartId::new(), x, y, orientation)
    }

    /// Create a stick with a pre-assigned ID.
    pub fn with_id(id: PartId, x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            id,
            x,
            y,
            orientation,
        }
    }

    /// The stick's unique ID.
    pub fn id(&self) -> PartId {
        self.id
    }

    /// Grid x coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Grid y coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// The stick's fixed orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
