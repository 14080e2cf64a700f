//! OBJ file loader for polygon counting
//!
//! Only geometry is read: `v` positions, `f` faces and the `o`/`g` statements
//! that split a file into named meshes. Polygons are fan-triangulated.

use super::Mesh;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// OBJ loading errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// Description of the problem
        message: String,
    },
    /// Invalid format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Loader for Wavefront OBJ geometry
pub struct ObjLoader;

impl ObjLoader {
    /// Load an OBJ file and return one mesh per object/group
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<Mesh>, ObjError> {
        let file = File::open(path)?;
        Self::parse_obj(BufReader::new(file))
    }

    /// Parse OBJ text from any buffered reader
    pub fn parse_obj<R: BufRead>(reader: R) -> Result<Vec<Mesh>, ObjError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut meshes = Vec::new();
        let mut current = Mesh::default();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_number = line_index + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "v" => {
                    if parts.len() < 4 {
                        return Err(parse_error(line_number, "vertex needs three coordinates"));
                    }
                    let mut position = [0.0; 3];
                    for (axis, value) in position.iter_mut().zip(&parts[1..4]) {
                        *axis = value
                            .parse()
                            .map_err(|_| parse_error(line_number, &format!("invalid coordinate '{value}'")))?;
                    }
                    positions.push(position);
                }
                "o" | "g" => {
                    let name = parts[1..].join(" ");
                    if current.indices.is_empty() {
                        current.name = name;
                    } else {
                        meshes.push(std::mem::replace(&mut current, Mesh::new(name, Vec::new(), Vec::new())));
                    }
                }
                "f" => {
                    if parts.len() < 4 {
                        warn!("Skipping degenerate face on line {line_number}");
                        continue;
                    }

                    let mut face_indices = Vec::with_capacity(parts.len() - 1);
                    for vertex_data in &parts[1..] {
                        let position = resolve_position(&positions, vertex_data, line_number)?;
                        current.positions.push(position);
                        face_indices.push(index_u32(current.positions.len() - 1)?);
                    }

                    // Triangulate face (simple fan triangulation)
                    for i in 1..(face_indices.len() - 1) {
                        current.indices.push(face_indices[0]);
                        current.indices.push(face_indices[i]);
                        current.indices.push(face_indices[i + 1]);
                    }
                }
                _ => {
                    // Ignore other commands
                }
            }
        }

        if positions.is_empty() {
            return Err(ObjError::InvalidFormat("No vertices found in OBJ file".to_string()));
        }

        if !current.indices.is_empty() || meshes.is_empty() {
            meshes.push(current);
        }
        Ok(meshes)
    }
}

fn parse_error(line: usize, message: &str) -> ObjError {
    ObjError::ParseError {
        line,
        message: message.to_string(),
    }
}

fn index_u32(index: usize) -> Result<u32, ObjError> {
    u32::try_from(index).map_err(|_| ObjError::InvalidFormat("Mesh exceeds u32 index range".to_string()))
}

/// Look up the position referenced by a face corner such as `7`, `7/2` or
/// `-1//3`. OBJ indices are 1-based; negative ones count back from the most
/// recent vertex.
fn resolve_position(positions: &[[f32; 3]], vertex_data: &str, line: usize) -> Result<[f32; 3], ObjError> {
    let raw = vertex_data.split('/').next().unwrap_or_default();
    let index: i64 = raw
        .parse()
        .map_err(|_| parse_error(line, &format!("invalid position index '{raw}'")))?;

    let len = i64::try_from(positions.len()).unwrap_or(i64::MAX);
    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(len + i),
    };

    resolved
        .filter(|i| (0..len).contains(i))
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| positions.get(i).copied())
        .ok_or_else(|| ObjError::InvalidFormat(format!("Position index {index} out of bounds on line {line}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CUBE_QUADS: &str = "\
# unit cube, quad faces
o Cube
v -1 -1  1
v  1 -1  1
v  1  1  1
v -1  1  1
v -1 -1 -1
v  1 -1 -1
v  1  1 -1
v -1  1 -1
f 1 2 3 4
f 8 7 6 5
f 5 1 4 8
f 2 6 7 3
f 4 3 7 8
f 5 6 2 1
";

    fn parse(text: &str) -> Result<Vec<Mesh>, ObjError> {
        ObjLoader::parse_obj(Cursor::new(text))
    }

    #[test]
    fn test_quads_are_fan_triangulated() {
        let meshes = parse(CUBE_QUADS).unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].name, "Cube");
        assert_eq!(meshes[0].triangle_count(), 12);
    }

    #[test]
    fn test_groups_split_meshes() {
        let text = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
g Roof
f 1 2 3
g Wall Left
f 1/1/1 2/2/2 4/3/3
f -4 -3 -1
";
        let meshes = parse(text).unwrap();
        let names: Vec<&str> = meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Roof", "Wall Left"]);
        assert_eq!(meshes[0].triangle_count(), 1);
        assert_eq!(meshes[1].triangle_count(), 2);
    }

    #[test]
    fn test_negative_index_counts_from_end() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 0 1\nf -3 -2 -1\n";
        let meshes = parse(text).unwrap();
        assert_eq!(meshes[0].positions, vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_vertices_without_faces() {
        let meshes = parse("v 0 0 0\n").unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].triangle_count(), 0);
    }

    #[test]
    fn test_degenerate_face_skipped() {
        let meshes = parse("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap();
        assert_eq!(meshes[0].triangle_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let err = parse("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidFormat(_)));
        let err = parse("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidFormat(_)));
    }

    #[test]
    fn test_bad_coordinate_reports_line() {
        let err = parse("v 0 0 0\nv 1 x 0\n").unwrap_err();
        assert!(matches!(err, ObjError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_empty_file_is_invalid() {
        assert!(matches!(parse("# nothing\n"), Err(ObjError::InvalidFormat(_))));
    }
}
