use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "extract-cli")]
#[command(about = "Extract and categorize project files into markdown")]
#[command(
    long_about = "Scans a project directory, categorizes files into code, data and local \
                  files using configurable patterns, and writes one markdown file per category. \
                  Respects .gitignore and custom exclude patterns."
)]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate markdown files from the project based on a config
    Generate {
        /// Config file (default: first of extract.config.yml, extract.config.yaml, ...)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for the markdown files
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Create a config file from a built-in template
    Init {
        /// Template name (common, go, flutter, laravel, vue, react, nodejs, python)
        #[arg(required_unless_present = "list")]
        template: Option<String>,

        /// Output file (default: extract.config.yml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List available templates
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
