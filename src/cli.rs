use std::path::PathBuf;

use accessorgen::Target;
use clap::{Parser, Subcommand};

/// accessorgen - generate accessor classes from entity schemas
#[derive(Parser, Debug)]
#[command(name = "accessorgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable NDJSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file applied on top of user and project config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a schema file and emit one class per entity
    Emit {
        /// Schema file (.toml, .yaml, .yml or .json)
        schema: PathBuf,

        /// Target language (defaults to config, then java)
        #[arg(short, long)]
        target: Option<Target>,

        /// Output root directory (defaults to [output] dir, then .)
        #[arg(short, long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print sources instead of writing files
        #[arg(long)]
        stdout: bool,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a schema file and report every violation
    Check {
        /// Schema file (.toml, .yaml, .yml or .json)
        schema: PathBuf,

        /// Target language (defaults to config, then java)
        #[arg(short, long)]
        target: Option<Target>,
    },

    /// Show how emitted files would differ from those on disk
    Diff {
        /// Schema file (.toml, .yaml, .yml or .json)
        schema: PathBuf,

        /// Target language (defaults to config, then java)
        #[arg(short, long)]
        target: Option<Target>,

        /// Output root directory (defaults to [output] dir, then .)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List supported targets and their default type tables
    Targets,
}
