//! Reactor is a library for exact bookkeeping of which cubes of a three-dimensional
//! integer grid are switched on, as a sequence of “reboot steps” turns whole cuboids
//! on or off.
//!
//! ## Data model
//!
//! * A [`Cuboid`] is an axis-aligned box of grid cubes with inclusive bounds. It is never
//!   empty. Cuboids support intersection, containment tests, and
//!   [difference](Cuboid::difference), which expresses `a − b` as at most six disjoint
//!   cuboids.
//! * A [`Region`] is a set of cubes, stored as a list of pairwise-disjoint cuboids.
//!   Because no two members overlap, its volume is just the sum of their volumes.
//!   [`Region::toggle()`] keeps the members disjoint by replacing every member that the
//!   incoming cuboid touches with its difference against it.
//! * A [`RebootStep`] is one line of a reboot procedure, such as
//!   `on x=10..12,y=10..12,z=10..12`. Procedures are parsed with
//!   [`parse_procedure()`](reboot::parse_procedure) and applied with
//!   [`replay()`](reboot::replay).
//!
//! Everything here is single-threaded and deterministic: steps must be applied in order,
//! since later steps override earlier ones wherever they overlap.
//!
//! ## Crate features
//!
//! * `serde`: Adds [`serde`] implementations for [`Cuboid`] and
//!   [`RebootReport`](reboot::RebootReport).
//! * `arbitrary`: Adds implementations of the [`arbitrary::Arbitrary`] trait for
//!   fuzzing / property testing on [`Cuboid`] and [`RebootStep`].
//!
//! ## Dependencies and global state
//!
//! `reactor` has no global state, except that it writes log messages using the [`log`]
//! crate and is therefore subject to that global configuration.
//!
//! [`Cuboid`]: crate::math::Cuboid
//! [`Region`]: crate::region::Region
//! [`Region::toggle()`]: crate::region::Region::toggle
//! [`RebootStep`]: crate::reboot::RebootStep
#![cfg_attr(
    not(feature = "arbitrary"),
    doc = "[`arbitrary::Arbitrary`]: https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html"
)]
#![cfg_attr(not(feature = "serde"), doc = "[`serde`]: https://docs.rs/serde/")]
#![forbid(unsafe_code)]

pub mod math;
pub mod reboot;
pub mod region;
