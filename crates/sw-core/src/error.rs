use crate::node::Slot;
use crate::part::{PartId, PartKind};
use crate::stick::Orientation;

/// Alias for `Result<T, SwError>`.
pub type SwResult<T> = Result<T, SwError>;

/// Errors that can occur when building a world or attaching sticks.
#[derive(Debug, thiserror::Error)]
pub enum SwError {
    /// An orientation index outside `0..=3` was supplied.
    #[error("invalid orientation: {0}")]
    InvalidOrientation(u8),

    /// The requested connection slot already holds a stick.
    #[error("slot {0} already occupied")]
    SlotOccupied(Slot),

    /// The stick lies outside the node's reach of one grid step.
    #[error("stick too far away: distance {distance:.3} exceeds sqrt(2)")]
    TooFar {
        /// Euclidean distance between the stick and the node.
        distance: f64,
    },

    /// The stick's orientation does not fit the direction it sits in.
    #[error("wrong orientation: offset calls for a {expected} stick, found {found}")]
    OrientationMismatch {
        /// The orientation the offset between stick and node calls for.
        expected: Orientation,
        /// The orientation the stick actually has.
        found: Orientation,
    },

    /// The requested slot is not the one the stick's position implies.
    #[error("wrong slot: offset calls for slot {expected}, requested {requested}")]
    SlotMismatch {
        /// The slot the offset between stick and node calls for.
        expected: Slot,
        /// The slot the caller asked to fill.
        requested: Slot,
    },

    /// The requested part ID does not exist in the world.
    #[error("part not found: {0}")]
    PartNotFound(PartId),

    /// A part ID resolved to the wrong kind of part.
    #[error("part {id} is not a {expected}")]
    KindMismatch {
        /// The ID that resolved to the wrong kind.
        id: PartId,
        /// The kind the operation requires.
        expected: PartKind,
    },
}
