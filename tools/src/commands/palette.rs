use clap::Parser;

use chroma::palette;

#[derive(Debug, Parser)]
pub struct Config {
    /// Print only the named entry
    #[arg(short, long)]
    name: Option<String>,
}

pub fn command(cfg: Config) {
    match cfg.name {
        Some(name) => match palette::by_name(&name) {
            Some(color) => println!("{} = {}", name, color),
            None => println!("no palette entry named {:?}", name),
        },
        None => {
            for (name, color) in palette::ALL {
                println!("{} = {}", name, color);
            }
        }
    }
}
