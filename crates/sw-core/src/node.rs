use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SwError, SwResult};
use crate::part::PartId;
use crate::stick::{Orientation, Stick};

/// One of the eight directional connection slots on a node, in index order
/// `N, NE, E, SE, S, SW, W, NW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Slot 0: straight above the node.
    North = 0,
    /// Slot 1: up and to the right.
    Northeast = 1,
    /// Slot 2: straight right.
    East = 2,
    /// Slot 3: down and to the right.
    Southeast = 3,
    /// Slot 4: straight below.
    South = 4,
    /// Slot 5: down and to the left.
    Southwest = 5,
    /// Slot 6: straight left.
    West = 6,
    /// Slot 7: up and to the left.
    Northwest = 7,
}

impl Slot {
    /// All eight slots in index order.
    pub const ALL: [Slot; 8] = [
        Slot::North,
        Slot::Northeast,
        Slot::East,
        Slot::Southeast,
        Slot::South,
        Slot::Southwest,
        Slot::West,
        Slot::Northwest,
    ];

    /// Parse a slot from its index (`0..=7`).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// The slot's position in a node's connection array.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The grid offset of a stick anchored at this slot, relative to the
    /// node. The y axis grows northward.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::Northeast => (1, 1),
            Self::East => (1, 0),
            Self::Southeast => (1, -1),
            Self::South => (0, -1),
            Self::Southwest => (-1, -1),
            Self::West => (-1, 0),
            Self::Northwest => (-1, 1),
        }
    }

    /// The stick orientation that fits this slot's direction.
    pub fn orientation(&self) -> Orientation {
        match self {
            Self::North | Self::South => Orientation::Vertical,
            Self::Northeast | Self::Southwest => Orientation::DiagonalAscending,
            Self::East | Self::West => Orientation::Horizontal,
            Self::Southeast | Self::Northwest => Orientation::DiagonalDescending,
        }
    }

    /// Compass abbreviation, as used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::West => "W",
            Self::Northwest => "NW",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A connector point with eight directional slots that accept stick
/// attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: PartId,
    x: i32,
    y: i32,
    slots: [Option<PartId>; 8],
}

impl Node {
    /// Create a new node with all eight slots empty.
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_id(PartId::new(), x, y)
    }

    /// Create a node with a pre-assigned ID.
    pub fn with_id(id: PartId, x: i32, y: i32) -> Self {
        Self {
            id,
            x,
            y,
            slots: [None; 8],
        }
    }

    /// The node's unique ID.
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

    /// The stick connected at `slot`, if any.
    pub fn connection(&self, slot: Slot) -> Option<PartId> {
        self.slots[slot.index()]
    }

    /// All occupied slots and the sticks filling them, in slot order.
    pub fn connections(&self) -> impl Iterator<Item = (Slot, PartId)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.slots[slot.index()].map(|id| (slot, id)))
    }

    /// Number of occupied slots.
    pub fn connection_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Attach `stick` at `slot`.
    ///
    /// The slot must be free, the stick must lie within the node's immediate
    /// neighborhood (Euclidean distance at most √2), and the stick must have
    /// the orientation and slot its offset calls for. The first failed check
    /// aborts the join with the matching [`SwError`] and the node is left
    /// untouched.
    pub fn join(&mut self, stick: &Stick, slot: Slot) -> SwResult<()> {
        self.check_attachment(stick, slot)?;
        self.slots[slot.index()] = Some(stick.id());
        Ok(())
    }

    /// The validation half of [`Node::join`]: occupancy, then distance, then
    /// orientation and slot consistency.
    fn check_attachment(&self, stick: &Stick, slot: Slot) -> SwResult<()> {
        if self.slots[slot.index()].is_some() {
            return Err(SwError::SlotOccupied(slot));
        }

        let dx = i64::from(stick.x()) - i64::from(self.x);
        let dy = i64::from(stick.y()) - i64::from(self.y);
        let distance = ((dx as f64).powi(2) + (dy as f64).powi(2)).sqrt();
        if distance > std::f64::consts::SQRT_2 {
            return Err(SwError::TooFar { distance });
        }

        // The axis relations are two independent ifs, not else-if: at
        // dx == 0 && dy == 0 both run, and no orientation satisfies both,
        // so a stick placed exactly on the node always fails here.
        if dx == 0 {
            orientation_rule(stick, Orientation::Vertical)?;
            if dy > 0 {
                slot_rule(slot, Slot::North)?;
            }
            if dy < 0 {
                slot_rule(slot, Slot::South)?;
            }
        }
        if dy == 0 {
            orientation_rule(stick, Orientation::Horizontal)?;
            if dx > 0 {
                slot_rule(slot, Slot::East)?;
            }
            if dx < 0 {
                slot_rule(slot, Slot::West)?;
            }
        }
        if dx != 0 && dy != 0 {
            if dx == dy {
                orientation_rule(stick, Orientation::DiagonalAscending)?;
                if dx > 0 {
                    slot_rule(slot, Slot::Northeast)?;
                }
                if dx < 0 {
                    slot_rule(slot, Slot::Southwest)?;
                }
            } else if dx == -dy {
                orientation_rule(stick, Orientation::DiagonalDescending)?;
                if dx > dy {
                    slot_rule(slot, Slot::Southeast)?;
                }
                if dx < dy {
                    slot_rule(slot, Slot::Northwest)?;
                }
            }
            // Any other diagonal offset matches no rule and passes straight
            // through; the distance check already rejected all of them (the
            // nearest is a knight's move away, √5 > √2).
        }
        Ok(())
    }
}

fn orientation_rule(stick: &Stick, expected: Orientation) -> SwResult<()> {
    if stick.orientation() == expected {
        Ok(())
    } else {
        Err(SwError::OrientationMismatch {
            expected,
            found: stick.orientation(),
        })
    }
}

fn slot_rule(requested: Slot, expected: Slot) -> SwResult<()> {
    if requested == expected {
        Ok(())
    } else {
        Err(SwError::SlotMismatch {
            expected,
            requested,
        })
    }
}
