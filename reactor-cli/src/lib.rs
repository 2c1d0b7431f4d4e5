//! Components of the `reactor` command-line tool.
//!
//! This is not a general-purpose library; it exists so that the binary's file handling and
//! logging setup can be tested on their own. Use [`reactor`] directly instead.

// Crate-specific lint settings. (General settings can be found in the workspace manifest.)
#![forbid(unsafe_code)]

use std::fmt;
use std::io::{self, Read as _};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;

use reactor::reboot::{RebootStep, parse_procedure};

pub mod logging;

/// Where to read a reboot procedure from.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ProcedureSource {
    /// Read standard input to its end.
    Stdin,
    /// Read the given file.
    File(PathBuf),
}

impl ProcedureSource {
    /// Interprets a command-line path argument, in which `-` means standard input.
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            ProcedureSource::Stdin
        } else {
            ProcedureSource::File(path)
        }
    }

    /// Reads and parses the whole procedure.
    pub fn load(&self) -> Result<Vec<RebootStep>, anyhow::Error> {
        let start_time = Instant::now();

        let text = match self {
            ProcedureSource::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read standard input")?;
                text
            }
            ProcedureSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        };
        let steps = parse_procedure(&text)
            .with_context(|| format!("failed to parse reboot steps from {self}"))?;

        log::debug!(
            "loaded {count} steps from {self} in {elapsed:.3?}",
            count = steps.len(),
            elapsed = start_time.elapsed(),
        );
        Ok(steps)
    }
}

impl fmt::Display for ProcedureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcedureSource::Stdin => write!(f, "standard input"),
            ProcedureSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(
            ProcedureSource::from_arg(PathBuf::from("-")),
            ProcedureSource::Stdin
        );
        assert_eq!(
            ProcedureSource::from_arg(PathBuf::from("./-")),
            ProcedureSource::File(PathBuf::from("./-"))
        );
    }

    #[test]
    fn missing_file_error() {
        let error = ProcedureSource::File(PathBuf::from("does/not/exist.txt"))
            .load()
            .unwrap_err();
        assert_eq!(
            error.to_string(),
            format!("failed to read {}", PathBuf::from("does/not/exist.txt").display())
        );
        assert!(error.root_cause().downcast_ref::<io::Error>().is_some());
    }
}
