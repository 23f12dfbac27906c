mod context;
mod flags;
mod parse;
mod prompts;
mod usage;

use std::process::ExitCode;

use crate::exits;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Interpret `args`, generate, and map the outcome to an exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let result = Context::new(&args).and_then(|mut ctx| {
        init_logging(ctx.flags.verbose);
        exits::harden();
        ctx.run()
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            prompts::error(&err);
            exits::failure()
        }
    }
}

/// Logger is configured here only; no environment variables are consulted.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}
