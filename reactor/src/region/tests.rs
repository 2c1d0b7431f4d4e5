use std::collections::HashSet;

use itertools::Itertools as _;
use pretty_assertions::assert_eq;
use rand::{Rng as _, SeedableRng as _};
use rand_xoshiro::Xoshiro256Plus;

use super::*;
use crate::math::{GridCoordinate, GridPoint};

fn cuboid(x: [GridCoordinate; 2], y: [GridCoordinate; 2], z: [GridCoordinate; 2]) -> Cuboid {
    Cuboid::from_bounds([x[0], y[0], z[0]], [x[1], y[1], z[1]])
}

fn random_cuboid(rng: &mut Xoshiro256Plus, max: GridCoordinate) -> Cuboid {
    let mut lower = [0; 3];
    let mut upper = [0; 3];
    for i in 0..3 {
        lower[i] = rng.random_range(0..=max);
        upper[i] = rng.random_range(lower[i]..=max);
    }
    Cuboid::from_bounds(lower, upper)
}

fn cubes_of(cuboid: Cuboid) -> impl Iterator<Item = GridPoint> {
    cuboid
        .x_range()
        .cartesian_product(cuboid.y_range())
        .cartesian_product(cuboid.z_range())
        .map(|((x, y), z)| GridPoint::new(x, y, z))
}

#[test]
fn empty() {
    let region = Region::new();
    assert!(region.is_empty());
    assert_eq!(region.len(), 0);
    assert_eq!(region.volume(), 0);
    assert_eq!(region.bounds(), None);
    assert_eq!(region.volume_within(Cuboid::ORIGIN_CUBE), 0);
}

/// Hand-computed by inclusion-exclusion: 27, then 27 + 27 - 8, then minus the 8 cubes
/// of the third cuboid that were on, then plus the one cube that was off.
#[test]
fn small_example_step_by_step() {
    let mut region = Region::new();

    region.toggle(cuboid([10, 12], [10, 12], [10, 12]), true);
    assert_eq!((region.volume(), region.len()), (27, 1));

    region.toggle(cuboid([11, 13], [11, 13], [11, 13]), true);
    assert_eq!((region.volume(), region.len()), (46, 4));
    region.consistency_check();

    region.toggle(cuboid([9, 11], [9, 11], [9, 11]), false);
    assert_eq!((region.volume(), region.len()), (38, 9));
    region.consistency_check();

    region.toggle(Cuboid::single_cube([10, 10, 10]), true);
    assert_eq!((region.volume(), region.len()), (39, 10));
    region.consistency_check();
}

#[test]
fn on_then_identical_off_is_empty() {
    let c = cuboid([-2, 2], [-2, 2], [-2, 2]);
    let mut region = Region::new();
    region.toggle(c, true);
    assert_eq!(region.volume(), 125);
    region.toggle(c, false);
    assert_eq!(region.volume(), 0);
    assert!(region.is_empty());
}

#[test]
fn on_twice_is_idempotent() {
    let c = cuboid([0, 3], [-5, 5], [7, 7]);
    let mut region = Region::new();
    region.toggle(c, true);
    let once = region.volume();
    region.toggle(c, true);
    assert_eq!(region.volume(), once);
    assert_eq!(region.cuboids(), &[c]);
}

#[test]
fn off_on_empty_region_does_nothing() {
    let mut region = Region::new();
    region.toggle(cuboid([0, 10], [0, 10], [0, 10]), false);
    assert!(region.is_empty());
}

/// Members that do not touch the toggled cuboid keep their identity and relative order.
#[test]
fn untouched_members_are_kept() {
    let a = cuboid([0, 0], [0, 0], [0, 0]);
    let b = cuboid([5, 6], [5, 6], [5, 6]);
    let mut region = Region::new();
    region.toggle(a, true);
    region.toggle(b, true);
    region.toggle(cuboid([100, 100], [0, 0], [0, 0]), false);
    assert_eq!(region.cuboids(), &[a, b]);
}

#[test]
fn volume_within_and_intersection() {
    let mut region = Region::new();
    region.toggle(cuboid([-60, -40], [0, 0], [0, 0]), true);
    region.toggle(cuboid([40, 60], [0, 0], [0, 0]), true);
    region.toggle(cuboid([0, 0], [-100, 100], [0, 0]), true);

    let query = cuboid([-50, 50], [-50, 50], [-50, 50]);
    assert_eq!(region.volume_within(query), 11 + 11 + 101);

    let inside = region.intersection(query);
    inside.consistency_check();
    assert_eq!(inside.volume(), region.volume_within(query));
    assert_eq!(inside.bounds(), Some(cuboid([-50, 50], [-50, 50], [0, 0])));

    assert_eq!(region.volume_within(cuboid([1000, 1000], [0, 0], [0, 0])), 0);
    assert!(region.intersection(cuboid([1000, 1000], [0, 0], [0, 0])).is_empty());
}

#[test]
fn bounds_encloses_members() {
    let mut region = Region::new();
    region.toggle(cuboid([1, 2], [3, 4], [5, 6]), true);
    region.toggle(cuboid([-1, 0], [10, 10], [5, 5]), true);
    assert_eq!(region.bounds(), Some(cuboid([-1, 2], [3, 10], [5, 6])));
}

#[test]
fn iteration() {
    let mut region = Region::new();
    region.toggle(cuboid([0, 3], [0, 3], [0, 3]), true);
    region.toggle(cuboid([1, 1], [1, 1], [1, 1]), false);
    let by_ref: Vec<Cuboid> = (&region).into_iter().copied().collect();
    let by_iter: Vec<Cuboid> = region.iter().copied().collect();
    assert_eq!(by_ref, by_iter);
    assert_eq!(by_iter.as_slice(), region.cuboids());
    assert_eq!(by_iter.iter().map(Cuboid::volume).sum::<Volume>(), 64 - 1);
}

#[test]
#[should_panic(expected = "overlap")]
fn consistency_check_detects_overlap() {
    let region = Region {
        cuboids: vec![
            cuboid([0, 2], [0, 2], [0, 2]),
            cuboid([2, 3], [2, 3], [2, 3]),
        ],
    };
    region.consistency_check();
}

/// Replays random toggles and compares against a set of individual cubes.
#[rstest::rstest]
fn matches_brute_force(#[values(0, 1, 2, 3)] seed: u64) {
    const MAX: GridCoordinate = 7;
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    let mut region = Region::new();
    let mut cubes: HashSet<GridPoint> = HashSet::new();

    for _ in 0..60 {
        let c = random_cuboid(&mut rng, MAX);
        let on = rng.random_bool(0.6);
        region.toggle(c, on);
        for cube in cubes_of(c) {
            if on {
                cubes.insert(cube);
            } else {
                cubes.remove(&cube);
            }
        }

        region.consistency_check();
        assert_eq!(region.volume(), cubes.len() as Volume);

        let query = random_cuboid(&mut rng, MAX);
        let within = region.volume_within(query);
        assert_eq!(
            within,
            cubes.iter().filter(|&&cube| query.contains_cube(cube)).count() as Volume
        );
        assert!(within <= query.volume());
        assert!(within <= region.volume());
        assert_eq!(region.intersection(query).volume(), within);
    }
}

/// Difference pieces never lose or duplicate cubes, across many random pairs.
#[test]
fn difference_conserves_volume_random() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0xC0FFEE);
    for _ in 0..2000 {
        let a = random_cuboid(&mut rng, 20);
        let b = random_cuboid(&mut rng, 20);
        let overlap = a.intersection(b).map_or(0, |c| c.volume());
        let pieces = a.difference(b);
        assert_eq!(
            pieces.iter().map(Cuboid::volume).sum::<Volume>() + overlap,
            a.volume(),
            "{a:?} - {b:?}"
        );
    }
}
