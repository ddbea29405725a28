//! The manor floor plan
//!
//! An immutable binary tree of rooms. Nodes live in an arena and are
//! addressed by index, so the explorer's position is a plain copyable
//! handle and no references into the tree are ever held across moves.

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Handle to a room in the map's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// Declarative shape of one room and its subtrees, as scenario config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomLayout {
    pub label: String,
    pub left: Option<Box<RoomLayout>>,
    pub right: Option<Box<RoomLayout>>,
}

impl RoomLayout {
    /// A room with no exits.
    pub fn leaf(label: &str) -> Self {
        Self {
            label: label.to_string(),
            left: None,
            right: None,
        }
    }

    /// A room with optional left and right subtrees.
    pub fn branch(label: &str, left: Option<RoomLayout>, right: Option<RoomLayout>) -> Self {
        Self {
            label: label.to_string(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }
}

/// One room in the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Room {
    label: String,
    left: Option<RoomId>,
    right: Option<RoomId>,
}

/// The manor: a fixed binary tree of labeled rooms.
///
/// Built once from a [`RoomLayout`] and never mutated afterwards. All
/// queries are pure; teardown is the arena vector's drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMap {
    rooms: Vec<Room>,
    root: RoomId,
}

impl RoomMap {
    /// Build the map from a layout. Labels key the clue table, so a
    /// duplicate label is a configuration error.
    pub fn build(layout: &RoomLayout) -> Result<Self> {
        let mut rooms = Vec::new();
        let mut seen = HashSet::new();
        let root = Self::build_node(layout, &mut rooms, &mut seen)?;
        Ok(Self { rooms, root })
    }

    fn build_node(
        layout: &RoomLayout,
        rooms: &mut Vec<Room>,
        seen: &mut HashSet<String>,
    ) -> Result<RoomId> {
        if !seen.insert(layout.label.clone()) {
            return Err(GameError::DuplicateRoom(layout.label.clone()).into());
        }

        let id = RoomId(rooms.len());
        rooms.push(Room {
            label: layout.label.clone(),
            left: None,
            right: None,
        });

        if let Some(ref child) = layout.left {
            let left = Self::build_node(child, rooms, seen)?;
            rooms[id.0].left = Some(left);
        }
        if let Some(ref child) = layout.right {
            let right = Self::build_node(child, rooms, seen)?;
            rooms[id.0].right = Some(right);
        }

        Ok(id)
    }

    /// The entrance room.
    pub fn root(&self) -> RoomId {
        self.root
    }

    pub fn label(&self, id: RoomId) -> &str {
        &self.rooms[id.0].label
    }

    pub fn left(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].left
    }

    pub fn right(&self, id: RoomId) -> Option<RoomId> {
        self.rooms[id.0].right
    }

    pub fn has_left(&self, id: RoomId) -> bool {
        self.rooms[id.0].left.is_some()
    }

    pub fn has_right(&self, id: RoomId) -> bool {
        self.rooms[id.0].right.is_some()
    }

    /// A room with no exits at all.
    pub fn is_dead_end(&self, id: RoomId) -> bool {
        !self.has_left(id) && !self.has_right(id)
    }

    /// Total number of rooms in the manor.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Whether `label` names a room in this map.
    pub fn contains_label(&self, label: &str) -> bool {
        self.rooms.iter().any(|r| r.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_manor() -> RoomLayout {
        RoomLayout::branch(
            "Hall",
            Some(RoomLayout::branch(
                "Library",
                Some(RoomLayout::leaf("Attic")),
                None,
            )),
            Some(RoomLayout::leaf("Kitchen")),
        )
    }

    #[test]
    fn build_preserves_shape() {
        let map = RoomMap::build(&small_manor()).unwrap();
        assert_eq!(map.len(), 4);

        let root = map.root();
        assert_eq!(map.label(root), "Hall");
        assert!(map.has_left(root));
        assert!(map.has_right(root));

        let library = map.left(root).unwrap();
        assert_eq!(map.label(library), "Library");
        assert!(map.has_left(library));
        assert!(!map.has_right(library));

        let attic = map.left(library).unwrap();
        assert_eq!(map.label(attic), "Attic");
        assert!(map.is_dead_end(attic));

        let kitchen = map.right(root).unwrap();
        assert_eq!(map.label(kitchen), "Kitchen");
        assert!(map.is_dead_end(kitchen));
    }

    #[test]
    fn missing_children_are_none() {
        let map = RoomMap::build(&RoomLayout::leaf("Cellar")).unwrap();
        let root = map.root();
        assert_eq!(map.left(root), None);
        assert_eq!(map.right(root), None);
        assert!(map.is_dead_end(root));
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let layout = RoomLayout::branch(
            "Hall",
            Some(RoomLayout::leaf("Library")),
            Some(RoomLayout::leaf("Library")),
        );
        let err = RoomMap::build(&layout).unwrap_err();
        assert!(err.to_string().contains("Library"));
    }

    #[test]
    fn contains_label_checks_every_room() {
        let map = RoomMap::build(&small_manor()).unwrap();
        assert!(map.contains_label("Attic"));
        assert!(!map.contains_label("Ballroom"));
    }
}
