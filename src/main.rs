use clap::{Parser, Subcommand};
use seqmap_core::{map_process, MapArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aligns paired-end reads against a reference sequence
    Map(MapArgs),
}

fn main() {
    let args = Cli::parse();

    match args.command {
        Commands::Map(cmd_args) => map_process(cmd_args),
    }
}
