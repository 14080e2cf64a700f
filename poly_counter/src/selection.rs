//! Builds a scene selection from OBJ files
//!
//! Each file becomes a root node named after the file stem; each object or
//! group inside it becomes a child node carrying that mesh.

use anyhow::{Context, Result};
use scene_kit::mesh::{ObjLoader, SceneNode};
use std::path::Path;

/// Load every file as a selected root, marking nodes named in `inactive` as
/// disabled.
pub fn build_selection<P: AsRef<Path>>(paths: &[P], inactive: &[String]) -> Result<Vec<SceneNode>> {
    paths
        .iter()
        .map(|path| load_root(path.as_ref(), inactive))
        .collect()
}

fn load_root(path: &Path, inactive: &[String]) -> Result<SceneNode> {
    let meshes = ObjLoader::load_obj(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let root_name = path
        .file_stem()
        .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned());
    let is_active = |name: &str| !inactive.iter().any(|n| n == name);

    let mut root = SceneNode::new(root_name.as_str()).with_active(is_active(&root_name));
    for (index, mesh) in meshes.into_iter().enumerate() {
        let name = if mesh.name.is_empty() {
            format!("{root_name}_{index}")
        } else {
            mesh.name.clone()
        };
        let active = is_active(&name);
        root = root.with_child(SceneNode::new(name).with_active(active).with_mesh(mesh));
    }

    log::debug!("Loaded {} with {} mesh nodes", path.display(), root.children.len());
    Ok(root)
}
