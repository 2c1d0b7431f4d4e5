#![no_main]

use core::fmt;

use reactor::math::Cuboid;
use reactor::reboot::RebootStep;
use reactor::region::Region;

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use pretty_assertions::assert_eq;

#[derive(Arbitrary, Debug)]
struct FuzzRegion {
    operations: Vec<Operation>,
}

#[derive(Arbitrary)]
enum Operation {
    Toggle(RebootStep),
    Query(Cuboid),
}

fuzz_target!(|input: FuzzRegion| {
    let mut region = Region::new();

    for operation in input.operations {
        match operation {
            Operation::Toggle(step) => {
                let volume_before = region.volume();
                let outside_before = volume_before - region.volume_within(step.cuboid);

                step.apply(&mut region);

                let inside = region.volume_within(step.cuboid);
                if step.on {
                    assert_eq!(inside, step.cuboid.volume());
                } else {
                    assert_eq!(inside, 0);
                }
                // Cubes outside the toggled cuboid are never affected.
                assert_eq!(region.volume() - inside, outside_before);
            }
            Operation::Query(query) => {
                let within = region.volume_within(query);
                assert!(within <= query.volume());
                assert!(within <= region.volume());
                assert_eq!(region.intersection(query).volume(), within);
            }
        }

        region.consistency_check();
        if let Some(bounds) = region.bounds() {
            assert_eq!(region.volume_within(bounds), region.volume());
        }
    }
});

/// Print operations in the form of code that can be roughly copied into a regression test.
impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_cuboid(f: &mut fmt::Formatter<'_>, cuboid: Cuboid) -> fmt::Result {
            let lower = cuboid.lower_bounds().to_array();
            let upper = cuboid.upper_bounds().to_array();
            write!(f, "Cuboid::from_bounds({lower:?}, {upper:?})")
        }

        match *self {
            Self::Toggle(RebootStep { on, cuboid }) => {
                write!(f, "region.toggle(")?;
                fmt_cuboid(f, cuboid)?;
                write!(f, ", {on:?});")
            }
            Self::Query(query) => {
                write!(f, "region.volume_within(")?;
                fmt_cuboid(f, query)?;
                write!(f, ");")
            }
        }
    }
}
