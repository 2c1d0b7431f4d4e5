//! Logging to stderr.

use anyhow::Context as _;
use log::Log as _;

/// A [`clap::Args`] struct for options controlling log output to stderr.
#[derive(Clone, Debug, clap::Args)]
#[expect(clippy::module_name_repetitions)]
pub struct LoggingArgs {
    /// Log every reboot step and the region's fragmentation to stderr.
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Remove timestamps from logs so that they are deterministic.
    ///
    /// This option is intended for internal tests only.
    #[arg(long = "simplify-log-format", hide = true)]
    pub(crate) simplify_log_format: bool,
}

/// Install a [`log`] global logger based on user-provided `options`.
pub fn install(options: &LoggingArgs) -> Result<(), anyhow::Error> {
    use log::LevelFilter::{Error, Info, Off, Trace};

    let &LoggingArgs {
        verbose,
        simplify_log_format,
    } = options;

    let stderr_logger = *simplelog::WriteLogger::new(
        match verbose {
            false => Info,
            true => Trace,
        },
        // Note: This has no target filters because `ReactorLogger` calls
        // `standard_filter` to do it.
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .set_time_level(if simplify_log_format { Off } else { Error })
            .build(),
        std::io::stderr(),
    );
    let max_level = simplelog::SharedLogger::level(&stderr_logger);

    log::set_boxed_logger(Box::new(ReactorLogger { stderr_logger }))
        .context("failed to initialize logging")?;
    log::set_max_level(max_level);

    Ok(())
}

/// Filter out log messages that are too detailed to be useful to users of this tool.
///
/// Only our own crates may log below [`log::Level::Info`]; dependencies' debug output is
/// not about the reactor.
pub fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    let target = metadata.target();
    metadata.level() <= log::Level::Info
        || target == "reactor"
        || target.starts_with("reactor::")
        || target.starts_with("reactor_cli")
        || target.starts_with("reactor_base")
}

/// [`log::Log`] implementation that [`install()`] registers globally.
struct ReactorLogger {
    stderr_logger: simplelog::WriteLogger<std::io::Stderr>,
}

impl log::Log for ReactorLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        standard_filter(metadata) && self.stderr_logger.enabled(metadata)
    }

    fn log(&self, record: &log::Record<'_>) {
        if !standard_filter(record.metadata()) {
            return;
        }
        self.stderr_logger.log(record);
    }

    fn flush(&self) {
        self.stderr_logger.flush();
    }
}
