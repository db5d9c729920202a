//! Core types for Stabwerk: sticks, nodes, and the world model.
//!
//! Stabwerk models a toy construction set on a 2D grid. A [`World`] owns
//! every part; sticks attach to the eight directional slots of a node, and
//! [`Node::join`] checks that a requested attachment is geometrically
//! consistent before recording it. Parts reference each other by [`PartId`],
//! so a node never owns the sticks it connects to and one stick can bridge
//! two nodes.

/// Error types used throughout the crate.
pub mod error;
/// Connector nodes, connection slots, and the attachment rules.
pub mod node;
/// Part identifiers and the part sum type.
pub mod part;
/// Sticks and their orientations.
pub mod stick;
/// The central world model that owns and connects parts.
pub mod world;

/// Re-export error types.
pub use error::{SwError, SwResult};
/// Re-export node types.
pub use node::{Node, Slot};
/// Re-export part types.
pub use part::{Part, PartId, PartKind};
/// Re-export stick types.
pub use stick::{Orientation, Stick};
/// Re-export the world model.
pub use world::World;
