//! boundlog binary: run a protocol session over stdin/stdout.
//!
//! Takes no arguments; the input stream itself carries the
//! configuration (its first line is the store capacity). Diagnostics go
//! to stderr so they never interleave with protocol output; set
//! `RUST_LOG` to enable them.

use std::io;
use std::process::ExitCode;

use boundlog_wire::Session;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match Session::serve(stdin.lock(), stdout.lock()) {
        Ok(_) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("boundlog: {err}");
            ExitCode::FAILURE
        }
    }
}
