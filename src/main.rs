mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::error::{EXIT_EXECUTABLE, PerfError};
use crate::input::{Overrides, resolve_config};
use crate::pipeline::run_loop;

/// Repeatedly run a perf-test executable and print running statistics of its score.
#[derive(Debug, Parser)]
#[command(name = "perfloop", version, about)]
struct Cli {
    /// Test filter name passed to the benchmark executable.
    filter: Option<String>,

    /// Benchmark executable; skips config and built-in discovery.
    #[arg(long, value_name = "PATH", env = "PERFLOOP_EXE")]
    exe: Option<PathBuf>,

    /// JSON config file [default: ./perfloop.json when present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Stop after N samples instead of looping forever.
    #[arg(long, value_name = "N")]
    runs: Option<u64>,

    /// Share of samples dropped from each tail for the truncated statistics.
    #[arg(long, value_name = "F")]
    trim_fraction: Option<f64>,

    /// Key of the `<key>=<int>` token holding the score.
    #[arg(long, value_name = "KEY")]
    metric_key: Option<String>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            exe: self.exe.clone(),
            config: self.config.clone(),
            filter: self.filter.clone(),
            trim_fraction: self.trim_fraction,
            metric_key: self.metric_key.clone(),
            runs: self.runs,
        }
    }
}

/// `None` for `--help`/`--version`, which clap exits from itself with
/// success. Usage errors share the executable/config code so that 2 and 3
/// stay reserved for benchmark output problems.
fn usage_exit_code(err: &clap::Error) -> Option<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(EXIT_EXECUTABLE),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match usage_exit_code(&err) {
            None => err.exit(),
            Some(code) => {
                let _ = err.print();
                std::process::exit(code);
            }
        },
    };
    logging::init_logging(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("perfloop: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), PerfError> {
    let cwd = std::env::current_dir().map_err(PerfError::WorkingDir)?;
    let config = resolve_config(&cli.overrides(), &cwd)?;
    tracing::info!(
        "using executable {} ({:?})",
        config.executable.display(),
        config.executable_source
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_loop(&config, &mut out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
