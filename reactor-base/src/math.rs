//! Mathematical utilities and decisions.

mod axis;
pub use axis::*;
mod cuboid;
pub use cuboid::*;
#[cfg(feature = "serde")]
mod serde_impls;

/// Unit of measure for [`euclid`] types whose components count whole grid cubes.
///
/// This type has no values; it exists only to keep grid coordinates from being mixed up
/// with any other kind of coordinate.
#[allow(clippy::empty_enum, clippy::exhaustive_enums)]
#[derive(Debug)]
pub enum Cube {}

/// Coordinates of a unit cube in the reactor grid.
///
/// Cuboid bounds are inclusive on both ends, so the full range of this type is usable.
pub type GridCoordinate = i32;

/// Numeric type used for counts of cubes along one axis.
///
/// This is wider than [`GridCoordinate`] because an inclusive range over every
/// [`GridCoordinate`] has 2<sup>32</sup> elements.
pub type GridSizeCoord = u64;

/// Position of a unit cube in the reactor grid.
pub type GridPoint = euclid::Point3D<GridCoordinate, Cube>;

/// Number of cubes along each axis of a [`Cuboid`].
pub type GridSize = euclid::Size3D<GridSizeCoord, Cube>;

/// Numeric type used for counts of cubes in a volume.
///
/// Any set of disjoint [`Cuboid`]s has a total volume of at most 2<sup>96</sup>,
/// so volume arithmetic in this type never overflows.
pub type Volume = u128;

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}
