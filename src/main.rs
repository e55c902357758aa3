use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use toys::run_program;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// toys runs a single source file: it calls `main` and prints the value it
/// returns.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run, usually a `.toys` file.
    file: PathBuf,
}

/// Installs a stderr logger when `RUST_LOG` is set, e.g. `RUST_LOG=toys=trace`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        return ExitCode::FAILURE;
    };

    match run_program(&source) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
