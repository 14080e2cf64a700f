//! Triangle meshes and polygon-count reporting
//!
//! Meshes here carry only what the counting tools need: positions and a
//! triangle index list.

mod obj_loader;
mod poly_count;

pub use obj_loader::{ObjLoader, ObjError};
pub use poly_count::{SceneNode, PolyCountReport, count_polys};

/// Indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Object or group name, empty when the source had none
    pub name: String,

    /// Vertex positions
    pub positions: Vec<[f32; 3]>,

    /// Index data for triangles
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new mesh
    pub fn new(name: impl Into<String>, positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            positions,
            indices,
        }
    }

    /// Number of triangles described by the index list
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unit quad made of two triangles, handy for tests and placeholders
    pub fn quad(name: impl Into<String>) -> Self {
        let positions = vec![
            [-0.5, 0.0, -0.5],
            [0.5, 0.0, -0.5],
            [0.5, 0.0, 0.5],
            [-0.5, 0.0, 0.5],
        ];
        Self::new(name, positions, vec![0, 1, 2, 2, 3, 0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_count() {
        assert_eq!(Mesh::quad("floor").triangle_count(), 2);
        assert_eq!(Mesh::default().triangle_count(), 0);
    }

    #[test]
    fn test_trailing_partial_triangle_ignored() {
        let mesh = Mesh::new("partial", vec![[0.0; 3]; 3], vec![0, 1, 2, 0, 1]);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
