mod cells;
mod classifier;
mod cli;
mod context;
mod detect;
mod error;
mod fmt;
mod importer;
mod models;
mod settings;
mod splitter;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            file,
            output_dir,
            format,
        } => cli::convert::run(file.as_deref(), output_dir.as_deref(), format.as_deref()),
        Commands::Batch {
            input_dir,
            output_dir,
        } => cli::batch::run(&input_dir, output_dir.as_deref()),
        Commands::Detect { file } => cli::detect::run(&file),
        Commands::Formats => cli::formats::run(),
        Commands::Config { output_dir } => cli::config::run(output_dir.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
