use clap::Parser;

use chroma::error::Result;
use chroma::{normalize_rgb, RgbInput};

#[derive(Debug, Parser)]
pub struct Config {
    /// Triple in the form "R, G, B" with each channel in 0-255
    #[arg(short, long)]
    rgb: String,
}

pub fn command(cfg: Config) -> Result<()> {
    let color = normalize_rgb(RgbInput::Text(cfg.rgb))?;
    let [r, g, b] = color.channels();
    println!("{}, {}, {}", r, g, b);
    Ok(())
}
