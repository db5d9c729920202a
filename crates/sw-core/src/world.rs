use std::collections::HashMap;

use crate::error::{SwError, SwResult};
use crate::node::{Node, Slot};
use crate::part::{Part, PartId, PartKind};
use crate::stick::{Orientation, Stick};

/// The central world model. Owns every part placed on the grid.
///
/// Parts are created through the factory methods, never removed, and
/// referenced everywhere else by [`PartId`]. Connections between nodes and
/// sticks are stored as IDs, so the world stays the sole owner.
#[derive(Debug, Clone)]
pub struct World {
    height: u32,
    width: u32,
    parts: HashMap<PartId, Part>,
    insertion_order: Vec<PartId>,
}

impl World {
    /// Create an empty world with the given grid bounds.
    ///
    /// The bounds are descriptive; part coordinates are not checked against
    /// them.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            parts: HashMap::new(),
            insertion_order: Vec::new(),
        }
    }

    /// Grid height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Grid width.
    pub fn width(&self) -> u32 {
        self.width
    }

    // -----------------------------------------------------------------------
    // Factories
    // -----------------------------------------------------------------------

    /// Create a stick, add it to the world, and return its ID.
    pub fn add_stick(&mut self, x: i32, y: i32, orientation: Orientation) -> PartId {
        self.insert(Part::Stick(Stick::new(x, y, orientation)))
    }

    /// Create a node with all slots empty, add it to the world, and return
    /// its ID.
    pub fn add_node(&mut self, x: i32, y: i32) -> PartId {
        self.insert(Part::Node(Node::new(x, y)))
    }

    fn insert(&mut self, part: Part) -> PartId {
        let id = part.id();
        self.insertion_order.push(id);
        self.parts.insert(id, part);
        id
    }

    // -----------------------------------------------------------------------
    // Connecting
    // -----------------------------------------------------------------------

    /// Attach the stick `stick` to the node `node` at `slot`.
    ///
    /// Resolves both IDs and delegates to [`Node::join`]; any validation
    /// error propagates unchanged and the node is left untouched.
    pub fn connect(&mut self, stick: PartId, node: PartId, slot: Slot) -> SwResult<()> {
        let stick = *self
            .parts
            .get(&stick)
            .ok_or(SwError::PartNotFound(stick))?
            .as_stick()
            .ok_or(SwError::KindMismatch {
                id: stick,
                expected: PartKind::Stick,
            })?;
        let node = self
            .parts
            .get_mut(&node)
            .ok_or(SwError::PartNotFound(node))?
            .as_node_mut()
            .ok_or(SwError::KindMismatch {
                id: node,
                expected: PartKind::Node,
            })?;
        node.join(&stick, slot)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get a part by ID.
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// Get a stick by ID.
    pub fn stick(&self, id: PartId) -> Option<&Stick> {
        self.parts.get(&id).and_then(|part| part.as_stick())
    }

    /// Get a node by ID.
    pub fn node(&self, id: PartId) -> Option<&Node> {
        self.parts.get(&id).and_then(|part| part.as_node())
    }

    /// Get a mutable node by ID, for joining sticks directly.
    pub fn node_mut(&mut self, id: PartId) -> Option<&mut Node> {
        self.parts.get_mut(&id).and_then(|part| part.as_node_mut())
    }

    // -----------------------------------------------------------------------
    // Iteration & statistics
    // -----------------------------------------------------------------------

    /// All parts in insertion order.
    pub fn all_parts(&self) -> impl Iterator<Item = &Part> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.parts.get(id))
    }

    /// All sticks in insertion order.
    pub fn sticks(&self) -> impl Iterator<Item = &Stick> {
        self.all_parts().filter_map(|part| part.as_stick())
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.all_parts().filter_map(|part| part.as_node())
    }

    /// Total number of parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of sticks.
    pub fn stick_count(&self) -> usize {
        self.sticks().count()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_empty() {
        let world = World::new(10, 20);
        assert_eq!(world.height(), 10);
        assert_eq!(world.width(), 20);
        assert_eq!(world.part_count(), 0);
        assert!(world.all_parts().next().is_none());
    }

    #[test]
    fn factories_append_in_insertion_order() {
        let mut world = World::new(8, 8);
        let first = world.add_stick(0, 1, Orientation::Vertical);
        let second = world.add_node(0, 0);
        let third = world.add_stick(1, 0, Orientation::Horizontal);

        let ids: Vec<PartId> = world.all_parts().map(Part::id).collect();
        assert_eq!(ids, vec![first, second, third]);
        assert_eq!(world.part_count(), 3);
        assert_eq!(world.stick_count(), 2);
        assert_eq!(world.node_count(), 1);
    }

    #[test]
    fn lookups_respect_part_kinds() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(2, 2, Orientation::DiagonalAscending);
        let node = world.add_node(1, 1);

        assert!(world.stick(stick).is_some());
        assert!(world.node(stick).is_none());
        assert!(world.node(node).is_some());
        assert!(world.stick(node).is_none());
        assert!(world.part(PartId::new()).is_none());

        let stored = world.stick(stick).unwrap();
        assert_eq!((stored.x(), stored.y()), (2, 2));
        assert_eq!(stored.orientation(), Orientation::DiagonalAscending);
    }

    #[test]
    fn connect_joins_and_records_the_stick() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(0, 1, Orientation::Vertical);
        let node = world.add_node(0, 0);

        world.connect(stick, node, Slot::North).unwrap();
        assert_eq!(world.node(node).unwrap().connection(Slot::North), Some(stick));
    }

    #[test]
    fn connect_propagates_join_failures_unchanged() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(3, 3, Orientation::DiagonalAscending);
        let node = world.add_node(0, 0);

        let err = world.connect(stick, node, Slot::Northeast).unwrap_err();
        assert!(matches!(err, SwError::TooFar { .. }));
        assert_eq!(world.node(node).unwrap().connection_count(), 0);
    }

    #[test]
    fn connect_rejects_unknown_ids() {
        let mut world = World::new(8, 8);
        let node = world.add_node(0, 0);
        let ghost = PartId::new();

        let err = world.connect(ghost, node, Slot::North).unwrap_err();
        assert!(matches!(err, SwError::PartNotFound(id) if id == ghost));

        let stick = world.add_stick(0, 1, Orientation::Vertical);
        let err = world.connect(stick, ghost, Slot::North).unwrap_err();
        assert!(matches!(err, SwError::PartNotFound(id) if id == ghost));
    }

    #[test]
    fn connect_rejects_parts_of_the_wrong_kind() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(0, 1, Orientation::Vertical);
        let node = world.add_node(0, 0);

        let err = world.connect(node, stick, Slot::North).unwrap_err();
        assert!(matches!(
            err,
            SwError::KindMismatch {
                expected: PartKind::Stick,
                ..
            }
        ));

        let err = world.connect(stick, stick, Slot::North).unwrap_err();
        assert!(matches!(
            err,
            SwError::KindMismatch {
                expected: PartKind::Node,
                ..
            }
        ));
    }

    #[test]
    fn a_stick_can_bridge_two_nodes() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(1, 0, Orientation::Horizontal);
        let left = world.add_node(0, 0);
        let right = world.add_node(2, 0);

        world.connect(stick, left, Slot::East).unwrap();
        world.connect(stick, right, Slot::West).unwrap();

        assert_eq!(world.node(left).unwrap().connection(Slot::East), Some(stick));
        assert_eq!(world.node(right).unwrap().connection(Slot::West), Some(stick));
        assert_eq!(world.part_count(), 3);
    }

    #[test]
    fn node_mut_allows_direct_joins() {
        let mut world = World::new(8, 8);
        let node = world.add_node(0, 0);
        let loose = Stick::new(0, -1, Orientation::Vertical);

        world.node_mut(node).unwrap().join(&loose, Slot::South).unwrap();
        assert_eq!(
            world.node(node).unwrap().connection(Slot::South),
            Some(loose.id())
        );
    }

    #[test]
    fn connections_serialize_as_bare_ids() {
        let mut world = World::new(8, 8);
        let stick = world.add_stick(0, 1, Orientation::Vertical);
        let node = world.add_node(0, 0);
        world.connect(stick, node, Slot::North).unwrap();

        let json = serde_json::to_value(world.node(node).unwrap()).unwrap();
        assert_eq!(json["slots"][0], serde_json::to_value(stick).unwrap());
        assert!(json["slots"][4].is_null());
        assert_eq!(json["x"], 0);
    }
}
