use clap::Parser;
use log::info;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    Kelvin(commands::kelvin::Config),
    Normalize(commands::normalize::Config),
    Palette(commands::palette::Config),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    info!("Run {:?}", cli.command);
    match cli.command {
        Commands::Kelvin(cfg) => commands::kelvin::command(cfg),
        Commands::Normalize(cfg) => commands::normalize::command(cfg).unwrap(),
        Commands::Palette(cfg) => commands::palette::command(cfg),
    }
}
