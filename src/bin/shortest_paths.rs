use std::io;
use std::process::ExitCode;

use lettered_sssp::runner::run_cases;
use lettered_sssp::{RunConfig, VertexNamer};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = RunConfig::default();
    let namer = VertexNamer::alphabet();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_cases(&config, &namer, &mut out) {
        Ok(summary) if summary.all_solved() => ExitCode::SUCCESS,
        Ok(summary) => {
            log::error!(
                "{} of {} cases failed",
                summary.failed.len(),
                summary.failed.len() + summary.solved
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
