//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Mixer - resolve bundler manifest entries to asset URLs
#[derive(Parser)]
#[command(name = "mixer")]
#[command(version)]
#[command(about = "Resolve bundler manifest entries to asset URLs", long_about = None)]
pub struct Cli {
    /// Configuration file (default: mix.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the resolved URL of each logical asset path
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Register assets and print the resulting head and body HTML
    Render {
        #[arg(required = true)]
        paths: Vec<String>,

        /// Defer assets: preload stylesheets, add `defer` to scripts
        #[arg(long)]
        defer: bool,
    },

    /// Print a sample configuration file
    Config,
}
