//! Binary that replays a reactor reboot procedure and reports how many cubes are on.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::io::{self, Write as _};
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser as _;

use reactor::reboot::{RebootReport, replay};
use reactor_cli::{ProcedureSource, logging};

mod command_options;
use command_options::{OutputFormat, ReactorArgs};

fn main() -> Result<(), anyhow::Error> {
    // Destructure as a check that we're using all the args
    let ReactorArgs {
        input_file,
        bounds,
        output_format,
        logging: logging_args,
    } = ReactorArgs::parse();

    logging::install(&logging_args)?;

    let steps = ProcedureSource::from_arg(input_file).load()?;

    let start_time = Instant::now();
    let region = replay(steps);
    log::debug!("replay took {:.3?}", start_time.elapsed());

    let report = RebootReport::new(&region, bounds);

    let mut stdout = io::stdout().lock();
    match output_format {
        OutputFormat::Text => writeln!(stdout, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &report)
                .context("failed to write report")?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;

    Ok(())
}
