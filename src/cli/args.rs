use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the protoclass binary.
#[derive(Parser, Debug)]
#[command(
    name = "protoclass",
    version,
    about = "Compose prototype-style classes from JSON manifests"
)]
pub struct CliArgs {
    /// Disable colored output.
    #[arg(long = "no-color", alias = "noColor", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every type with its supertype, statics and resolved members.
    Inspect {
        /// Path to the manifest.
        manifest: PathBuf,
    },

    /// Print the namespace tree the manifest publishes.
    Tree {
        /// Path to the manifest.
        manifest: PathBuf,
    },

    /// Instantiate a type and invoke one of its methods.
    Call {
        /// Path to the manifest.
        manifest: PathBuf,

        /// Dotted path of the type to instantiate.
        path: String,

        /// Method to invoke on the new instance.
        method: String,

        /// Method argument; parsed as JSON, or taken as a string.
        #[arg(long = "arg", value_name = "VALUE")]
        args: Vec<String>,
    },
}

impl CliArgs {
    pub fn manifest(&self) -> &std::path::Path {
        match &self.command {
            Command::Inspect { manifest }
            | Command::Tree { manifest }
            | Command::Call { manifest, .. } => manifest,
        }
    }
}
