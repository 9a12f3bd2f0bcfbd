use glam::Vec3;
use rustc_hash::FxHashMap;

use super::SceneRoot;
use crate::camera::bounds::Aabb;

/// A named node: its world position and, for geometry nodes, its
/// world-space bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneNode {
    /// World-space origin of the node.
    pub position: Vec3,
    /// World-space bounds of the node's geometry, if it has any.
    pub bounds: Option<Aabb>,
}

/// Flat name → node map implementing [`SceneRoot`].
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: FxHashMap<String, SceneNode>,
}

impl NodeTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the node called `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        position: Vec3,
        bounds: Option<Aabb>,
    ) {
        let _ = self
            .nodes
            .insert(name.into(), SceneNode { position, bounds });
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with_node(
        mut self,
        name: impl Into<String>,
        position: Vec3,
        bounds: Option<Aabb>,
    ) -> Self {
        self.insert(name, position, bounds);
        self
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.get(name)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the table has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneRoot for NodeTable {
    fn find_by_name(&self, name: &str) -> Option<Vec3> {
        self.nodes.get(name).map(|n| n.position)
    }

    /// Union of every node's bounds; nodes without geometry contribute
    /// their position.
    fn bounds(&self) -> Option<Aabb> {
        self.nodes
            .values()
            .map(|n| n.bounds.unwrap_or_else(|| Aabb::from_point(n.position)))
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        let table = NodeTable::new()
            .with_node("pendulum", Vec3::new(0.0, -3.0, 0.2), None)
            .with_node("anchor", Vec3::new(0.0, 1.0, -0.1), None);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.find_by_name("pendulum"),
            Some(Vec3::new(0.0, -3.0, 0.2))
        );
        assert_eq!(table.find_by_name("gear_hours"), None);
    }

    #[test]
    fn bounds_merges_geometry_and_bare_positions() {
        let table = NodeTable::new()
            .with_node(
                "case",
                Vec3::ZERO,
                Some(Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))),
            )
            .with_node("pendulum", Vec3::new(0.0, -4.0, 0.0), None);
        let b = table.bounds().unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -4.0, -1.0));
        assert_eq!(b.max, Vec3::splat(1.0));
        assert!(NodeTable::new().bounds().is_none());
    }
}
