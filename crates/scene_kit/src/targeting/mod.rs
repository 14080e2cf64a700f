//! Ground-plane target selection
//!
//! Picks the nearest or farthest candidate from an origin, measuring distance
//! on the horizontal (XZ) plane only. Height differences never influence the
//! result, so a flyer directly above the origin counts as being on top of it.
//!
//! Candidates are borrowed, never copied: the returned reference always points
//! into the caller's collection. Distances are compared squared.
//!
//! ```rust
//! use scene_kit::foundation::math::Vec3;
//! use scene_kit::targeting::{find_nearest, find_nearest_within};
//!
//! let towers = [Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 20.0, 2.0)];
//! let origin = Vec3::new(0.0, 0.0, 0.0);
//!
//! assert_eq!(find_nearest(origin, &towers), Some(&towers[1]));
//! // Only accept targets closer than 1.5 units (squared threshold).
//! assert_eq!(find_nearest_within(origin, &towers, 1.5 * 1.5), None);
//! ```

use crate::foundation::math::{planar_distance_squared, Point3, Transform, Vec3};
use std::rc::Rc;
use std::sync::Arc;

/// Anything that occupies a point in world space.
pub trait Positioned {
    /// World space position (Y-up)
    fn position(&self) -> Vec3;
}

impl Positioned for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

impl Positioned for Point3 {
    fn position(&self) -> Vec3 {
        self.coords
    }
}

impl Positioned for Transform {
    fn position(&self) -> Vec3 {
        self.position
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Box<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Rc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: Positioned + ?Sized> Positioned for Arc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

/// Single pass over `candidates`, keeping the first one whose squared planar
/// distance `beats` the best seen so far (starting from `initial`).
fn select<'a, T, I, F>(origin: Vec3, candidates: I, initial: f32, beats: F) -> Option<(usize, &'a T)>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(f32, f32) -> bool,
{
    let mut best = None;
    let mut best_distance = initial;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = planar_distance_squared(candidate.position(), origin);
        if beats(distance, best_distance) {
            best = Some((index, candidate));
            best_distance = distance;
        }
    }

    best
}

/// Candidate closest to `origin` on the ground plane.
///
/// Ties go to the candidate encountered first. Returns `None` for an empty
/// collection or when no candidate's squared distance is below `f32::MAX`
/// (it overflowed to infinity or is NaN).
pub fn find_nearest<'a, T, I>(origin: Vec3, candidates: I) -> Option<&'a T>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    find_nearest_within(origin, candidates, f32::MAX)
}

/// Candidate closest to `origin` whose squared planar distance is strictly
/// below `max_distance_squared`.
///
/// A threshold tighter than every candidate yields `None`.
pub fn find_nearest_within<'a, T, I>(origin: Vec3, candidates: I, max_distance_squared: f32) -> Option<&'a T>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    select(origin, candidates, max_distance_squared, |d, best| d < best).map(|(_, target)| target)
}

/// Candidate farthest from `origin` on the ground plane.
///
/// Only candidates with a positive planar distance qualify, so a collection
/// whose members all share the origin's XZ coordinates yields `None`. Ties go
/// to the candidate encountered first.
pub fn find_farthest<'a, T, I>(origin: Vec3, candidates: I) -> Option<&'a T>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    select(origin, candidates, 0.0, |d, best| d > best).map(|(_, target)| target)
}

/// Iteration index of the candidate [`find_nearest`] would return.
pub fn find_nearest_index<'a, T, I>(origin: Vec3, candidates: I) -> Option<usize>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    select(origin, candidates, f32::MAX, |d, best| d < best).map(|(index, _)| index)
}

/// Iteration index of the candidate [`find_farthest`] would return.
pub fn find_farthest_index<'a, T, I>(origin: Vec3, candidates: I) -> Option<usize>
where
    T: Positioned + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    select(origin, candidates, 0.0, |d, best| d > best).map(|(index, _)| index)
}
