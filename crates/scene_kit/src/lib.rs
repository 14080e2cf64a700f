//! # Scene Kit
//!
//! Small, engine-agnostic helpers for 3D gameplay code.
//!
//! ## Features
//!
//! - **Targeting**: nearest/farthest selection on the ground (XZ) plane
//! - **Persistence**: JSON save/load of game data under a configurable root
//! - **Mesh Stats**: triangle counting over OBJ files and scene selections
//! - **Foundation**: planar math, slice helpers, duration formatting, delayed calls
//! - **Color**: hex and 8-bit channel conversion
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_kit::prelude::*;
//!
//! let enemies = vec![
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 0.0, 3.0),
//!     Vec3::new(2.0, 0.0, 0.0),
//! ];
//! let origin = Vec3::zeros();
//!
//! assert_eq!(find_nearest(origin, &enemies), Some(&enemies[0]));
//! assert_eq!(find_farthest(origin, &enemies), Some(&enemies[1]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod targeting;
pub mod color;
pub mod config;
pub mod persistence;
pub mod mesh;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        color::{Color, ColorError},
        config::{Config, ConfigError, SceneKitConfig, SaveConfig, LoggingConfig},
        foundation::{
            collections::{append_items, concat_slices, contains_item},
            delay::{run_after, RunGate},
            math::{Vec3, Point3, Quat, Transform, planar_distance, look_towards},
            time::{format_duration, ordinal_suffix},
        },
        mesh::{Mesh, ObjLoader, ObjError, SceneNode, PolyCountReport, count_polys},
        persistence::{SaveStore, PersistenceError, record::to_field_map},
        targeting::{
            Positioned,
            find_nearest, find_nearest_within, find_farthest,
            find_nearest_index, find_farthest_index,
        },
    };
}
