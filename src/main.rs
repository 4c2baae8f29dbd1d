// j2t: CLI entry point for the Java-to-TypeScript wrapper generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "j2t",
    about = "j2t CLI — TypeScript marshaling wrappers from Java reflection metadata"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript wrappers from a reflection metadata dump.
    Generate {
        /// Path to j2t.config.toml.
        #[arg(long, default_value = "j2t.config.toml")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { config } => {
            j2t_codegen::run_generate(&config);
        }
    }
}
