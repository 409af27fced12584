//! Subcommand execution.
//!
//! Every command loads its manifest into a fresh registry, so nothing leaks
//! into the process-wide one.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use protoclass_runtime::{NamespaceRegistry, Value};

use crate::cli::args::{CliArgs, Command};
use crate::cli::reporter::Reporter;
use crate::manifest::{LoadedManifest, load_manifest, parse_arg};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// A declared interface method was invoked but never implemented.
pub const EXIT_IMPLEMENTATION_MISSING: i32 = 2;

/// What a command printed and how the process should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: EXIT_SUCCESS,
        }
    }
}

pub fn run(args: &CliArgs, reporter: &Reporter) -> Result<Outcome> {
    let loaded = load(args.manifest())?;

    match &args.command {
        Command::Inspect { .. } => Ok(Outcome::success(reporter.render_types(loaded.types()))),
        Command::Tree { .. } => Ok(Outcome::success(reporter.render_tree(loaded.registry()))),
        Command::Call {
            path, method, args, ..
        } => call(&loaded, path, method, args, reporter),
    }
}

fn load(path: &Path) -> Result<LoadedManifest> {
    let manifest = load_manifest(path)?;
    let loaded = manifest
        .build(&NamespaceRegistry::anchored())
        .with_context(|| format!("failed to build manifest: {}", path.display()))?;
    debug!(manifest = %path.display(), types = loaded.len(), "loaded manifest");
    Ok(loaded)
}

fn call(
    loaded: &LoadedManifest,
    path: &str,
    method: &str,
    args: &[String],
    reporter: &Reporter,
) -> Result<Outcome> {
    let ty = loaded
        .get(path)
        .cloned()
        .with_context(|| format!("no type at '{path}' in the manifest"))?;
    let instance = ty
        .new_instance(&[])
        .with_context(|| format!("failed to instantiate {}", ty.label()))?;
    let args: Vec<Value> = args.iter().map(|arg| parse_arg(arg)).collect();

    match instance.call(method, &args) {
        Ok(value) => Ok(Outcome::success(value.to_string())),
        Err(err) if err.is_implementation_missing() => Ok(Outcome {
            output: reporter.format_error(&err),
            exit_code: EXIT_IMPLEMENTATION_MISSING,
        }),
        Err(err) => Err(err).with_context(|| format!("failed to call {}::{method}", ty.label())),
    }
}
