mod cli;
mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use styr_registry::BaseDirRegistry;
use tracing_subscriber::EnvFilter;

use cli::Args;
use prompt::PromptPicker;

fn main() -> anyhow::Result<ExitCode> {
    // stdout carries command output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let storage_path = match &args.data_file {
        Some(path) => path.clone(),
        None => styr_registry::ensure_storage_path(),
    };
    let mut registry = BaseDirRegistry::initialize(storage_path);

    let stdin = io::stdin();
    let mut picker = PromptPicker::new(stdin.lock(), io::stderr());

    let mut stdout = io::stdout().lock();
    let ok = cli::execute(&args, &mut registry, &mut picker, &mut stdout)?;
    stdout.flush()?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
