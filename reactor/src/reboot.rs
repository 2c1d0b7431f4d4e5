//! Reboot procedures: the text format of [`RebootStep`]s, and replaying them into a
//! [`Region`].

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

use crate::math::{Axis, Cuboid, GridCoordinate, InvalidRangeError, Volume};
use crate::region::Region;

/// One step of a reboot procedure: turn every cube in [`cuboid`](Self::cuboid) on or off.
///
/// The text form, as accepted by [`FromStr`] and produced by [`Display`](fmt::Display), is
///
/// ```text
/// on x=10..12,y=10..12,z=10..12
/// ```
///
/// with inclusive ranges, optionally negative coordinates, and the axes in `x`, `y`, `z`
/// order.
///
/// ```
/// use reactor::math::Cuboid;
/// use reactor::reboot::RebootStep;
///
/// let step: RebootStep = "off x=-5..5,y=0..0,z=3..4".parse().unwrap();
/// assert_eq!(step, RebootStep {
///     on: false,
///     cuboid: Cuboid::from_bounds([-5, 0, 3], [5, 0, 4]),
/// });
/// assert_eq!(step.to_string(), "off x=-5..5,y=0..0,z=3..4");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[allow(clippy::exhaustive_structs)]
pub struct RebootStep {
    /// Whether the cubes are turned on (`true`) or off (`false`).
    pub on: bool,
    /// The cubes affected.
    pub cuboid: Cuboid,
}

impl RebootStep {
    /// Applies this step to `region`.
    pub fn apply(self, region: &mut Region) {
        region.toggle(self.cuboid, self.on);
    }
}

impl fmt::Display for RebootStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let switch = if self.on { "on" } else { "off" };
        write!(f, "{switch} {}", self.cuboid)
    }
}

impl FromStr for RebootStep {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (switch, ranges) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let on = match switch {
            "on" => true,
            "off" => false,
            other => return Err(ParseStepError::Switch(other.to_owned())),
        };

        let ranges = ranges.trim_start();
        if ranges.is_empty() {
            return Err(ParseStepError::MissingRanges);
        }
        let parts: Vec<&str> = ranges.split(',').collect();
        let &[x, y, z] = parts.as_slice() else {
            return Err(ParseStepError::RangeCount(parts.len()));
        };

        let cuboid = Cuboid::checked_from_ranges([
            parse_axis_range(Axis::X, x)?,
            parse_axis_range(Axis::Y, y)?,
            parse_axis_range(Axis::Z, z)?,
        ])?;

        Ok(RebootStep { on, cuboid })
    }
}

/// Parses `x=-3..7` into `-3..=7`, checking that the axis name is `expected`.
fn parse_axis_range(
    expected: Axis,
    text: &str,
) -> Result<core::ops::RangeInclusive<GridCoordinate>, ParseStepError> {
    let text = text.trim();
    let (name, range) = text
        .split_once('=')
        .ok_or_else(|| ParseStepError::RangeSyntax(text.to_owned()))?;
    if Axis::from_name(name.trim()) != Some(expected) {
        return Err(ParseStepError::Axis {
            expected,
            found: name.trim().to_owned(),
        });
    }
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| ParseStepError::RangeSyntax(text.to_owned()))?;
    Ok(parse_coordinate(start)?..=parse_coordinate(end)?)
}

fn parse_coordinate(text: &str) -> Result<GridCoordinate, ParseStepError> {
    let text = text.trim();
    text.parse().map_err(|source| ParseStepError::Coordinate {
        text: text.to_owned(),
        source,
    })
}

/// Error from parsing a single [`RebootStep`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseStepError {
    /// The step did not start with `on` or `off`.
    #[error("expected 'on' or 'off', found {0:?}")]
    Switch(String),

    /// The step had a switch word but nothing after it.
    #[error("missing cuboid ranges after 'on' or 'off'")]
    MissingRanges,

    /// The step did not have exactly three comma-separated ranges.
    #[error("expected 3 comma-separated ranges, found {0}")]
    RangeCount(usize),

    /// A range was labeled with the wrong axis, or the axes were out of order.
    #[error("expected range for axis {expected:x}, found axis {found:?}")]
    Axis {
        /// The axis that should have appeared in this position.
        expected: Axis,
        /// The text that appeared instead.
        found: String,
    },

    /// A range was not of the form `axis=start..end`.
    #[error("expected a range like 'x=1..2', found {0:?}")]
    RangeSyntax(String),

    /// A coordinate was not an integer in the supported range.
    #[error("invalid coordinate {text:?}")]
    Coordinate {
        /// The text that should have been a coordinate.
        text: String,
        /// Why it was not one.
        #[source]
        source: ParseIntError,
    },

    /// A range had its start greater than its end.
    #[error(transparent)]
    Inverted(#[from] InvalidRangeError),
}

/// Error from [`parse_procedure()`]: a [`ParseStepError`] and the line it occurred on.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("line {line}: invalid reboot step {text:?}")]
pub struct ParseProcedureError {
    line: usize,
    text: String,
    #[source]
    detail: ParseStepError,
}

impl ParseProcedureError {
    /// The 1-based number of the line that could not be parsed.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The text of the line that could not be parsed, without its line ending.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// What was wrong with the line.
    pub fn detail(&self) -> &ParseStepError {
        &self.detail
    }
}

/// Parses a reboot procedure: one [`RebootStep`] per line, in order.
///
/// Blank lines are ignored. Any other line that is not a valid step is an error; the
/// steps of a procedure depend on each other, so there is no partial result.
///
/// Repeated identical steps are kept, since a repeated step may undo an intervening one.
///
/// ```
/// use reactor::reboot::parse_procedure;
///
/// let steps = parse_procedure("on x=0..1,y=0..1,z=0..1\n\noff x=1..1,y=1..1,z=1..1\n")?;
/// assert_eq!(steps.len(), 2);
///
/// let error = parse_procedure("on x=0..1,y=0..1,z=0..1\non x=0..1\n").unwrap_err();
/// assert_eq!(error.line(), 2);
/// # Ok::<(), reactor::reboot::ParseProcedureError>(())
/// ```
pub fn parse_procedure(text: &str) -> Result<Vec<RebootStep>, ParseProcedureError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.parse().map_err(|detail| ParseProcedureError {
                line: index + 1,
                text: line.to_owned(),
                detail,
            })
        })
        .collect()
}

/// Applies the steps in order.
impl Extend<RebootStep> for Region {
    fn extend<I: IntoIterator<Item = RebootStep>>(&mut self, steps: I) {
        for step in steps {
            step.apply(self);
        }
    }
}

/// Applies every step, in order, to an initially empty [`Region`], and returns it.
pub fn replay(steps: impl IntoIterator<Item = RebootStep>) -> Region {
    let mut region = Region::new();
    let mut count: usize = 0;
    region.extend(steps.into_iter().inspect(|_| count += 1));
    log::debug!(
        "replayed {count} reboot steps: {volume} cubes on in {members} cuboids",
        volume = region.volume(),
        members = region.len(),
    );
    region
}

/// The region of the reactor that the initialization steps are concerned with:
/// `-50..=50` on every axis.
pub fn initialization_region() -> Cuboid {
    Cuboid::from_bounds([-50, -50, -50], [50, 50, 50])
}

/// Summary of a reactor's state after a reboot procedure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub struct RebootReport {
    /// The cuboid that [`within_bounds`](Self::within_bounds) counts.
    pub bounds: Cuboid,
    /// Number of cubes on within [`bounds`](Self::bounds).
    pub within_bounds: Volume,
    /// Number of cubes on in total.
    pub total: Volume,
    /// Number of disjoint cuboids the region was made of.
    pub cuboids: usize,
}

impl RebootReport {
    /// Measures `region`, counting the cubes within `bounds` separately.
    pub fn new(region: &Region, bounds: Cuboid) -> Self {
        Self {
            bounds,
            within_bounds: region.volume_within(bounds),
            total: region.volume(),
            cuboids: region.len(),
        }
    }
}

impl fmt::Display for RebootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            bounds,
            within_bounds,
            total,
            cuboids: _,
        } = self;
        writeln!(f, "cubes on within {bounds}: {within_bounds}")?;
        write!(f, "total cubes on: {total}")
    }
}
