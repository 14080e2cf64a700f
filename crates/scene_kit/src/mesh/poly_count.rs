//! Polygon counts over a selection of scene nodes
//!
//! Every node below a selected root is visited, including inactive ones. The
//! `active` total only includes meshes on nodes whose own flag is set; a
//! parent being inactive does not exclude an active child.

use super::Mesh;
use log::info;

/// Named node in a scene hierarchy that may own meshes
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Node name
    pub name: String,

    /// The node's own enabled flag
    pub active: bool,

    /// Meshes rendered by this node
    pub meshes: Vec<Mesh>,

    /// Child nodes
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create an active node with no meshes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
            meshes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: set the enabled flag
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builder: attach a mesh
    #[must_use]
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.meshes.push(mesh);
        self
    }

    /// Builder: attach a child node
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child called `name`
    pub fn find_child(&self, name: &str) -> Option<&SceneNode> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Mutable access to the first direct child called `name`
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    /// Triangles across this node's own meshes, children excluded
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }

    /// This node followed by all of its descendants, depth first
    pub fn descendants(&self) -> Vec<&SceneNode> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children.iter().rev());
        }
        nodes
    }
}

/// Triangle totals for a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolyCountReport {
    /// Triangles on every visited node
    pub total: usize,

    /// Triangles on nodes that are themselves active
    pub active: usize,
}

/// Count triangles under every node in `selection`.
///
/// Roots are counted independently, so selecting a node together with one of
/// its ancestors counts its meshes twice.
pub fn count_polys(selection: &[SceneNode]) -> PolyCountReport {
    let mut report = PolyCountReport::default();

    for root in selection {
        for node in root.descendants() {
            if node.meshes.is_empty() {
                continue;
            }

            let triangles = node.triangle_count();
            info!("{} Poly Count: {} active: {}", node.name, triangles, node.active);

            report.total += triangles;
            if node.active {
                report.active += triangles;
            }
        }
    }

    info!("Total active poly count: {}", report.active);
    info!("Total poly count: {}", report.total);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tris(count: usize) -> Mesh {
        let indices = (0..count * 3).map(|i| u32::try_from(i % 3).unwrap()).collect();
        Mesh::new("tris", vec![[0.0; 3]; 3], indices)
    }

    fn house() -> SceneNode {
        SceneNode::new("House")
            .with_mesh(tris(10))
            .with_child(SceneNode::new("Door").with_mesh(tris(4)))
            .with_child(
                SceneNode::new("Attic")
                    .with_active(false)
                    .with_mesh(tris(6))
                    .with_child(SceneNode::new("Lamp").with_mesh(tris(3))),
            )
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(count_polys(&[]), PolyCountReport::default());
    }

    #[test]
    fn test_inactive_nodes_count_towards_total_only() {
        let report = count_polys(&[house()]);
        assert_eq!(report.total, 23);
        // Lamp is active even though its parent is not
        assert_eq!(report.active, 17);
    }

    #[test]
    fn test_nodes_without_meshes_count_zero() {
        let report = count_polys(&[SceneNode::new("Empty").with_child(SceneNode::new("Pivot"))]);
        assert_eq!(report, PolyCountReport { total: 0, active: 0 });
    }

    #[test]
    fn test_overlapping_selection_counts_twice() {
        let house = house();
        let door = house.find_child("Door").unwrap().clone();
        let report = count_polys(&[house, door]);
        assert_eq!(report.total, 27);
        assert_eq!(report.active, 21);
    }

    #[test]
    fn test_find_child_is_direct_only() {
        let house = house();
        assert!(house.find_child("Attic").is_some());
        assert!(house.find_child("Lamp").is_none());
        assert_eq!(
            house.find_child("Attic").and_then(|attic| attic.find_child("Lamp")).map(|n| n.name.as_str()),
            Some("Lamp")
        );
    }

    #[test]
    fn test_node_with_several_meshes_sums_them() {
        let rig = SceneNode::new("Rig")
            .with_mesh(tris(5))
            .with_mesh(tris(7))
            .with_child(SceneNode::new("Hat").with_active(false).with_mesh(tris(2)));

        assert_eq!(rig.triangle_count(), 12);
        assert_eq!(count_polys(&[rig]), PolyCountReport { total: 14, active: 12 });
    }

    #[test]
    fn test_find_child_mut() {
        let mut house = house();
        house.find_child_mut("Door").unwrap().active = false;
        assert_eq!(count_polys(&[house]).active, 13);
    }

    #[test]
    fn test_descendants_order() {
        let house = house();
        let names: Vec<&str> = house.descendants().into_iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["House", "Door", "Attic", "Lamp"]);
    }
}
