//! [`Region`], a set of grid cubes maintained as disjoint [`Cuboid`]s.

use core::slice;

use itertools::Itertools as _;

use crate::math::{Cuboid, Volume};

#[cfg(test)]
mod tests;

/// A set of cubes in the reactor grid, stored as a list of pairwise-disjoint [`Cuboid`]s.
///
/// The only way to change a [`Region`] is [`Region::toggle()`], which preserves the
/// invariant that no two members intersect. That invariant is what makes
/// [`Region::volume()`] a plain sum.
///
/// The order of the members has no meaning, but it is deterministic: the same sequence
/// of toggles always produces the same member list.
///
/// ```
/// use reactor::math::Cuboid;
/// use reactor::region::Region;
///
/// let mut region = Region::new();
/// region.toggle(Cuboid::from_bounds([10, 10, 10], [12, 12, 12]), true);
/// region.toggle(Cuboid::from_bounds([11, 11, 11], [13, 13, 13]), true);
/// assert_eq!(region.volume(), 46);
///
/// region.toggle(Cuboid::from_bounds([9, 9, 9], [11, 11, 11]), false);
/// assert_eq!(region.volume(), 38);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Region {
    /// No two of these intersect.
    cuboids: Vec<Cuboid>,
}

impl Region {
    /// Constructs an empty [`Region`].
    pub const fn new() -> Self {
        Self {
            cuboids: Vec::new(),
        }
    }

    /// Sets every cube in `cuboid` to be on (included in the region) or off (excluded).
    ///
    /// Every current member that intersects `cuboid` is replaced by the pieces of it that
    /// lie outside `cuboid`; then, if `on` is true, `cuboid` itself is added whole.
    pub fn toggle(&mut self, cuboid: Cuboid, on: bool) {
        let old_count = self.cuboids.len();
        let mut fragmented: usize = 0;

        let mut new_cuboids = Vec::with_capacity(old_count + usize::from(on));
        for existing in self.cuboids.drain(..) {
            if existing.intersects(cuboid) {
                fragmented += 1;
                new_cuboids.extend(existing.difference(cuboid));
            } else {
                new_cuboids.push(existing);
            }
        }
        if on {
            new_cuboids.push(cuboid);
        }
        self.cuboids = new_cuboids;

        log::trace!(
            "turned {state} {cuboid}: {fragmented} of {old_count} members cut, \
                {new_count} members now",
            state = if on { "on" } else { "off" },
            new_count = self.cuboids.len(),
        );
    }

    /// Returns the number of cubes in the region.
    pub fn volume(&self) -> Volume {
        self.cuboids.iter().map(Cuboid::volume).sum()
    }

    /// Returns the number of cubes in the region that are also in `query`.
    ///
    /// This is equal to `self.intersection(query).volume()`, without building the
    /// intermediate [`Region`].
    pub fn volume_within(&self, query: Cuboid) -> Volume {
        self.cuboids
            .iter()
            .filter_map(|member| member.intersection(query))
            .map(|part| part.volume())
            .sum()
    }

    /// Returns a new region containing exactly the cubes that are both in `self` and in
    /// `query`.
    #[must_use]
    pub fn intersection(&self, query: Cuboid) -> Region {
        Region {
            // Intersections of disjoint cuboids with the same cuboid are still disjoint.
            cuboids: self
                .cuboids
                .iter()
                .filter_map(|member| member.intersection(query))
                .collect(),
        }
    }

    /// Returns the smallest [`Cuboid`] containing every cube in the region, or [`None`]
    /// if the region is empty.
    pub fn bounds(&self) -> Option<Cuboid> {
        self.cuboids.iter().copied().reduce(Cuboid::union_box)
    }

    /// Returns the number of disjoint cuboids the region is currently made of.
    ///
    /// This is a measure of fragmentation, not of size; see [`Region::volume()`].
    pub fn len(&self) -> usize {
        self.cuboids.len()
    }

    /// Returns whether the region contains no cubes.
    pub fn is_empty(&self) -> bool {
        self.cuboids.is_empty()
    }

    /// Returns the disjoint cuboids the region is made of.
    pub fn cuboids(&self) -> &[Cuboid] {
        &self.cuboids
    }

    /// Iterates over the disjoint cuboids the region is made of.
    pub fn iter(&self) -> slice::Iter<'_, Cuboid> {
        self.cuboids.iter()
    }

    /// Panics if any two members of the region intersect.
    ///
    /// This is always a bug in [`Region`]; the check exists for tests and fuzzing.
    #[track_caller]
    pub fn consistency_check(&self) {
        for (a, b) in self.cuboids.iter().tuple_combinations() {
            assert!(
                !a.intersects(*b),
                "Region members {a:?} and {b:?} overlap at {overlap:?}",
                overlap = a.intersection(*b),
            );
        }
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a Cuboid;
    type IntoIter = slice::Iter<'a, Cuboid>;

    fn into_iter(self) -> Self::IntoIter {
        self.cuboids.iter()
    }
}
