//! Command line option parsing.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use clap::Parser;

use reactor::math::{Axis, Cuboid, GridCoordinate};
use reactor_cli::logging::LoggingArgs;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "reactor", about, version,
    help_template = "\
{name} {version}
{about-with-newline}
{usage-heading}
    {usage}

{all-args}{after-help}",
)]
pub(crate) struct ReactorArgs {
    /// File of reboot steps to replay, one per line, such as
    /// `on x=10..12,y=10..12,z=10..12`.
    ///
    /// If `-`, the steps are read from standard input.
    #[arg(value_name = "FILE")]
    pub(crate) input_file: PathBuf,

    /// Cuboid within which to count cubes separately from the total.
    ///
    /// Accepts `X0..X1,Y0..Y1,Z0..Z1`, optionally with `x=` prefixes as in the input file.
    /// Ranges are inclusive.
    #[arg(
        long = "bounds",
        short = 'b',
        value_name = "X0..X1,Y0..Y1,Z0..Z1",
        default_value = "-50..50,-50..50,-50..50",
        value_parser = parse_bounds,
    )]
    pub(crate) bounds: Cuboid,

    /// How to print the result.
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output_format: OutputFormat,

    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One line each for the bounded and total counts.
    Text,
    /// A JSON object with the bounds, both counts, and the number of disjoint cuboids.
    Json,
}

fn parse_bounds(s: &str) -> Result<Cuboid, String> {
    let parts: Vec<&str> = s.split(',').collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(String::from("must be three comma-separated ranges"));
    };
    Cuboid::checked_from_ranges([
        parse_bounds_range(Axis::X, x)?,
        parse_bounds_range(Axis::Y, y)?,
        parse_bounds_range(Axis::Z, z)?,
    ])
    .map_err(|error| error.to_string())
}

fn parse_bounds_range(axis: Axis, part: &str) -> Result<RangeInclusive<GridCoordinate>, String> {
    let part = part.trim();
    let range = part.strip_prefix(&format!("{axis:x}=")).unwrap_or(part);
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| format!("{part:?} is not a range like \"-50..50\""))?;
    let parse = |text: &str| {
        let text = text.trim();
        text.parse::<GridCoordinate>()
            .map_err(|_| format!("{text:?} is not an integer coordinate"))
    };
    Ok(parse(start)?..=parse(end)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_cli() {
        ReactorArgs::command().debug_assert();
    }

    #[test]
    fn bounds_plain() {
        assert_eq!(
            parse_bounds("-50..50,-50..50,-50..50"),
            Ok(Cuboid::from_bounds([-50, -50, -50], [50, 50, 50]))
        );
    }

    #[test]
    fn bounds_with_axis_names() {
        assert_eq!(
            parse_bounds("x=0..1, y=-2..2, z=7..7"),
            Ok(Cuboid::from_bounds([0, -2, 7], [1, 2, 7]))
        );
    }

    #[test]
    fn bounds_errors() {
        assert_eq!(
            parse_bounds("0..1,0..1"),
            Err(String::from("must be three comma-separated ranges"))
        );
        assert_eq!(
            parse_bounds("0..1,0-1,0..1"),
            Err(String::from("\"0-1\" is not a range like \"-50..50\""))
        );
        assert_eq!(
            parse_bounds("0..1,0..one,0..1"),
            Err(String::from("\"one\" is not an integer coordinate"))
        );
        assert!(parse_bounds("5..4,0..1,0..1").is_err());
    }

    #[test]
    fn defaults() {
        let args = ReactorArgs::try_parse_from(["reactor", "steps.txt"]).unwrap();
        assert_eq!(args.input_file, PathBuf::from("steps.txt"));
        assert_eq!(
            args.bounds,
            Cuboid::from_bounds([-50, -50, -50], [50, 50, 50])
        );
        assert_eq!(args.output_format, OutputFormat::Text);
        assert!(!args.logging.verbose);
    }
}
