//! Axis-aligned integer-coordinate boxes with inclusive bounds ([`Cuboid`]),
//! and the set operations the reactor model is built from.

use alloc::vec::Vec;
use core::fmt;
use core::ops::RangeInclusive;

use crate::math::{Axis, GridCoordinate, GridPoint, GridSize, GridSizeCoord, Volume};

/// An axis-aligned box of unit cubes in the reactor grid.
///
/// A [`Cuboid`] is identified by the coordinates of its lowest and highest cubes, and
/// *both* bounds are inclusive: `Cuboid::from_bounds([0, 0, 0], [0, 0, 0])` contains
/// exactly one cube. Consequently, there is no such thing as an empty [`Cuboid`];
/// every operation whose result could be empty returns an [`Option`] or a [`Vec`]
/// instead.
///
/// Cuboids are plain values. Two cuboids with the same bounds are interchangeable.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Cuboid {
    lower_bounds: GridPoint,
    /// Constructor checks ensure this is not smaller than `lower_bounds` on any axis.
    upper_bounds: GridPoint,
}

impl Cuboid {
    /// Cuboid containing only the cube at `[0, 0, 0]`.
    pub const ORIGIN_CUBE: Cuboid = Cuboid {
        lower_bounds: GridPoint::new(0, 0, 0),
        upper_bounds: GridPoint::new(0, 0, 0),
    };

    /// Constructs a [`Cuboid`] from the inclusive bounds of the cubes it contains.
    ///
    /// Returns [`Err`] if, on any axis, the lower bound is greater than the upper bound.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// assert!(Cuboid::checked_from_bounds([10, 10, 10], [12, 12, 12]).is_ok());
    /// assert!(Cuboid::checked_from_bounds([10, 10, 10], [12, 9, 12]).is_err());
    /// ```
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn checked_from_bounds(
        lower_bounds: impl Into<GridPoint>,
        upper_bounds: impl Into<GridPoint>,
    ) -> Result<Self, InvalidRangeError> {
        Self::checked_from_points(lower_bounds.into(), upper_bounds.into())
    }

    fn checked_from_points(
        lower_bounds: GridPoint,
        upper_bounds: GridPoint,
    ) -> Result<Self, InvalidRangeError> {
        if upper_bounds.x < lower_bounds.x
            || upper_bounds.y < lower_bounds.y
            || upper_bounds.z < lower_bounds.z
        {
            return Err(InvalidRangeError {
                lower_bounds: lower_bounds.to_array(),
                upper_bounds: upper_bounds.to_array(),
            });
        }

        Ok(Cuboid {
            lower_bounds,
            upper_bounds,
        })
    }

    /// Constructs a [`Cuboid`] from the inclusive bounds of the cubes it contains.
    ///
    /// Panics if, on any axis, the lower bound is greater than the upper bound.
    /// Use [`Cuboid::checked_from_bounds()`] to avoid panics.
    #[track_caller]
    #[allow(clippy::missing_inline_in_public_items, reason = "is generic already")]
    pub fn from_bounds(
        lower_bounds: impl Into<GridPoint>,
        upper_bounds: impl Into<GridPoint>,
    ) -> Self {
        Self::checked_from_bounds(lower_bounds, upper_bounds).expect("Cuboid::from_bounds")
    }

    /// Constructs a [`Cuboid`] from one inclusive range per axis, in X, Y, Z order.
    ///
    /// Returns [`Err`] if any of the ranges is empty.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// assert_eq!(
    ///     Cuboid::checked_from_ranges([-2..=2, 0..=0, 5..=7]),
    ///     Ok(Cuboid::from_bounds([-2, 0, 5], [2, 0, 7])),
    /// );
    /// ```
    #[inline]
    pub fn checked_from_ranges(
        ranges: [RangeInclusive<GridCoordinate>; 3],
    ) -> Result<Self, InvalidRangeError> {
        let [x, y, z] = ranges;
        Self::checked_from_points(
            GridPoint::new(*x.start(), *y.start(), *z.start()),
            GridPoint::new(*x.end(), *y.end(), *z.end()),
        )
    }

    /// Constructs a [`Cuboid`] containing exactly the one cube at `cube`.
    #[inline]
    pub fn single_cube(cube: impl Into<GridPoint>) -> Self {
        let cube = cube.into();
        Cuboid {
            lower_bounds: cube,
            upper_bounds: cube,
        }
    }

    /// Coordinates of the lowest cube contained in the cuboid, i.e. the inclusive lower
    /// bound on each axis.
    #[inline]
    pub fn lower_bounds(&self) -> GridPoint {
        self.lower_bounds
    }

    /// Coordinates of the highest cube contained in the cuboid, i.e. the inclusive upper
    /// bound on each axis.
    #[inline]
    pub fn upper_bounds(&self) -> GridPoint {
        self.upper_bounds
    }

    /// The range of coordinates for cubes within the cuboid along the given axis.
    #[inline]
    pub fn axis_range(&self, axis: Axis) -> RangeInclusive<GridCoordinate> {
        self.lower_bounds[axis]..=self.upper_bounds[axis]
    }

    /// The range of X coordinates for cubes within the cuboid.
    #[inline]
    pub fn x_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::X)
    }

    /// The range of Y coordinates for cubes within the cuboid.
    #[inline]
    pub fn y_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::Y)
    }

    /// The range of Z coordinates for cubes within the cuboid.
    #[inline]
    pub fn z_range(&self) -> RangeInclusive<GridCoordinate> {
        self.axis_range(Axis::Z)
    }

    /// Number of cubes along each axis. Every component is at least 1.
    #[inline]
    pub fn size(&self) -> GridSize {
        let mut size = GridSize::new(0, 0, 0);
        for axis in Axis::ALL {
            size[axis] =
                GridSizeCoord::from(self.upper_bounds[axis].abs_diff(self.lower_bounds[axis])) + 1;
        }
        size
    }

    /// Computes the number of cubes in this cuboid, i.e. the product of all sizes.
    ///
    /// This cannot overflow, and is never zero.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// assert_eq!(Cuboid::from_bounds([10, 10, 10], [12, 12, 12]).volume(), 27);
    /// assert_eq!(Cuboid::single_cube([-7, 0, 7]).volume(), 1);
    /// ```
    #[inline]
    pub fn volume(&self) -> Volume {
        let size = self.size();
        Axis::ALL
            .into_iter()
            .map(|axis| Volume::from(size[axis]))
            .product()
    }

    /// Returns whether the cuboid includes the given cube position.
    #[inline]
    pub fn contains_cube(&self, cube: impl Into<GridPoint>) -> bool {
        let cube = cube.into();
        Axis::ALL.into_iter().all(|axis| {
            self.lower_bounds[axis] <= cube[axis] && cube[axis] <= self.upper_bounds[axis]
        })
    }

    /// Returns whether this cuboid includes every cube in the other cuboid.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// let big = Cuboid::from_bounds([0, 0, 0], [9, 9, 9]);
    /// assert!(big.contains_cuboid(big));
    /// assert!(big.contains_cuboid(Cuboid::from_bounds([0, 4, 9], [1, 5, 9])));
    /// assert!(!big.contains_cuboid(Cuboid::from_bounds([0, 4, 9], [1, 5, 10])));
    /// ```
    #[inline]
    pub fn contains_cuboid(&self, other: Cuboid) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            self.lower_bounds[axis] <= other.lower_bounds[axis]
                && other.upper_bounds[axis] <= self.upper_bounds[axis]
        })
    }

    /// Returns whether `self` and `other` have at least one cube in common.
    ///
    /// This is equivalent to `self.intersection(other).is_some()`.
    #[inline]
    pub fn intersects(&self, other: Cuboid) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            self.lower_bounds[axis] <= other.upper_bounds[axis]
                && other.lower_bounds[axis] <= self.upper_bounds[axis]
        })
    }

    /// Returns the cuboid containing every cube that both `self` and `other` contain,
    /// or [`None`] if there are no such cubes.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// assert_eq!(
    ///     Cuboid::from_bounds([10, 10, 10], [12, 12, 12])
    ///         .intersection(Cuboid::from_bounds([11, 11, 11], [13, 13, 13])),
    ///     Some(Cuboid::from_bounds([11, 11, 11], [12, 12, 12])),
    /// );
    ///
    /// // Cuboids which are merely adjacent do not intersect.
    /// assert_eq!(
    ///     Cuboid::from_bounds([0, 0, 0], [1, 1, 1])
    ///         .intersection(Cuboid::from_bounds([2, 0, 0], [3, 1, 1])),
    ///     None,
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn intersection(self, other: Cuboid) -> Option<Cuboid> {
        Self::checked_from_points(
            self.lower_bounds.max(other.lower_bounds),
            self.upper_bounds.min(other.upper_bounds),
        )
        .ok()
    }

    /// Returns the smallest [`Cuboid`] which contains every cube of both inputs
    /// (and, generally, some cubes which are in neither).
    #[inline]
    #[must_use]
    pub fn union_box(self, other: Cuboid) -> Cuboid {
        Cuboid {
            lower_bounds: self.lower_bounds.min(other.lower_bounds),
            upper_bounds: self.upper_bounds.max(other.upper_bounds),
        }
    }

    /// Cuts the cuboid into the cubes whose `axis` coordinate is less than `value`, and
    /// those whose coordinate is `value` or greater.
    ///
    /// Either part is [`None`] if it would contain no cubes; at least one part is always
    /// present.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::{Axis, Cuboid};
    ///
    /// let c = Cuboid::from_bounds([0, 0, 0], [9, 1, 1]);
    /// assert_eq!(
    ///     c.split(Axis::X, 4),
    ///     (
    ///         Some(Cuboid::from_bounds([0, 0, 0], [3, 1, 1])),
    ///         Some(Cuboid::from_bounds([4, 0, 0], [9, 1, 1])),
    ///     ),
    /// );
    /// assert_eq!(c.split(Axis::X, 0), (None, Some(c)));
    /// assert_eq!(c.split(Axis::X, 10), (Some(c), None));
    /// ```
    #[inline]
    pub fn split(self, axis: Axis, value: GridCoordinate) -> (Option<Cuboid>, Option<Cuboid>) {
        if value <= self.lower_bounds[axis] {
            return (None, Some(self));
        }
        if value > self.upper_bounds[axis] {
            return (Some(self), None);
        }

        // Now lower < value <= upper, so `value - 1` cannot overflow and neither part
        // is inverted.
        let mut below = self;
        below.upper_bounds[axis] = value - 1;
        let mut above = self;
        above.lower_bounds[axis] = value;
        (Some(below), Some(above))
    }

    /// Returns disjoint cuboids which together contain exactly the cubes of `self` that
    /// are not in `other`.
    ///
    /// The result has at most 6 elements, none of which intersect each other or `other`.
    /// If `self` and `other` do not intersect, the result is `[self]`; if `other` contains
    /// `self`, the result is empty.
    ///
    /// ```
    /// # extern crate reactor_base as reactor;
    /// use reactor::math::Cuboid;
    ///
    /// let a = Cuboid::from_bounds([10, 10, 10], [12, 12, 12]);
    /// let b = Cuboid::from_bounds([11, 11, 11], [13, 13, 13]);
    ///
    /// let pieces = a.difference(b);
    /// assert_eq!(pieces.len(), 3);
    /// assert_eq!(pieces.iter().map(Cuboid::volume).sum::<u128>(), 27 - 8);
    ///
    /// assert!(a.difference(a).is_empty());
    /// ```
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn difference(self, other: Cuboid) -> Vec<Cuboid> {
        if !self.intersects(other) {
            return vec![self];
        }

        // Peel off, one axis at a time, the slabs of the remainder lying below and above
        // `other`'s range on that axis. What is left over at the end is the overlap.
        let mut pieces = Vec::with_capacity(6);
        let mut remainder = Some(self);
        for axis in Axis::ALL {
            let Some(current) = remainder else {
                break;
            };

            let (below, rest) = current.split(axis, other.lower_bounds[axis]);
            pieces.extend(below);

            remainder = match (rest, other.upper_bounds[axis].checked_add(1)) {
                (Some(rest), Some(above_start)) => {
                    let (inside, above) = rest.split(axis, above_start);
                    pieces.extend(above);
                    inside
                }
                // No coordinate is above `GridCoordinate::MAX`, so there is no upper slab.
                (rest, _) => rest,
            };
        }

        pieces
    }
}

impl fmt::Debug for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cuboid")
            .field(&RangeWithLength(self.x_range()))
            .field(&RangeWithLength(self.y_range()))
            .field(&RangeWithLength(self.z_range()))
            .finish()
    }
}

/// Formats the cuboid in the notation used by reboot steps, `x=A..B,y=C..D,z=E..F`,
/// where both ends of each range are inclusive.
impl fmt::Display for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(
                f,
                "{axis:x}={lower}..{upper}",
                lower = self.lower_bounds[axis],
                upper = self.upper_bounds[axis]
            )?;
        }
        Ok(())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Cuboid {
    #[allow(clippy::missing_inline_in_public_items)]
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut lower: [GridCoordinate; 3] = u.arbitrary()?;
        let mut upper: [GridCoordinate; 3] = u.arbitrary()?;
        for axis in Axis::ALL {
            crate::math::sort_two(&mut lower[axis], &mut upper[axis]);
        }
        Ok(Cuboid::from_bounds(lower, upper))
    }

    #[allow(clippy::missing_inline_in_public_items)]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <[[GridCoordinate; 3]; 2] as arbitrary::Arbitrary<'a>>::size_hint(depth)
    }
}

/// Error when a [`Cuboid`] cannot be constructed because, on some axis, its lower bound
/// is greater than its upper bound.
#[derive(Clone, Copy, Debug, displaydoc::Display, Eq, PartialEq)]
#[displaydoc("cuboid's lower bounds {lower_bounds:?} are greater than its upper bounds {upper_bounds:?}")]
pub struct InvalidRangeError {
    lower_bounds: [GridCoordinate; 3],
    upper_bounds: [GridCoordinate; 3],
}

impl InvalidRangeError {
    /// The axes on which the requested lower bound exceeded the upper bound.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn inverted_axes(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.lower_bounds[axis] > self.upper_bounds[axis])
    }
}

impl core::error::Error for InvalidRangeError {}

/// `Debug`-formatting helper
struct RangeWithLength(RangeInclusive<GridCoordinate>);
impl fmt::Debug for RangeWithLength {
    #[allow(clippy::missing_inline_in_public_items)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = i64::from(*range.end()) - i64::from(*range.start()) + 1
            )
        } else {
            range.fmt(f)
        }
    }
}
