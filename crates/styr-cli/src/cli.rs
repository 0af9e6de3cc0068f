use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use styr_registry::{pick_directory, BaseDirRegistry, DirectoryPicker};

#[derive(Parser, Debug)]
#[command(name = "styr", version, about = "Manage the list of base directories")]
pub struct Args {
    /// Use this file instead of the default registry location
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print registered directories in the order they were added
    List,
    /// Register a directory
    Add { path: String },
    /// Unregister a directory
    Remove { path: String },
    /// Choose a directory interactively and register it
    Browse,
    /// Print the location of the registry file
    Path,
}

/// Run one command against the registry.
///
/// Returns `false` when the registry could not save a change.
pub fn execute(
    args: &Args,
    registry: &mut BaseDirRegistry,
    picker: &mut dyn DirectoryPicker,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    match &args.command {
        Command::List => {
            if args.json {
                writeln!(out, "{}", serde_json::to_string(registry.list())?)?;
            } else {
                for dir in registry.list() {
                    writeln!(out, "{}", dir)?;
                }
            }
            Ok(true)
        }
        Command::Add { path } => add(args.json, registry, path, out),
        Command::Remove { path } => {
            let result = registry.remove(path);
            if args.json {
                writeln!(out, "{}", serde_json::to_string(&result)?)?;
            } else if result.success {
                writeln!(out, "removed {}", path)?;
            } else {
                writeln!(out, "failed to save registry after removing {}", path)?;
            }
            Ok(result.success)
        }
        Command::Browse => {
            let path = pick_directory(picker);
            if path.is_empty() {
                if args.json {
                    writeln!(out, "{}", json!({ "path": "" }))?;
                } else {
                    writeln!(out, "no directory selected")?;
                }
                return Ok(true);
            }
            add(args.json, registry, &path, out)
        }
        Command::Path => {
            let path = registry.storage_path().display().to_string();
            if args.json {
                writeln!(out, "{}", json!({ "path": path }))?;
            } else {
                writeln!(out, "{}", path)?;
            }
            Ok(true)
        }
    }
}

fn add(json: bool, registry: &mut BaseDirRegistry, path: &str, out: &mut dyn Write) -> anyhow::Result<bool> {
    let result = registry.add(path);
    if json {
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
    } else if result.already_exists {
        writeln!(out, "already present {}", path)?;
    } else if result.success {
        writeln!(out, "added {}", path)?;
    } else {
        writeln!(out, "failed to save registry after adding {}", path)?;
    }
    Ok(result.success)
}
