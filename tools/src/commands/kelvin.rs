use clap::Parser;

use chroma::kelvin_to_rgb;

#[derive(Debug, Parser)]
pub struct Config {
    /// Color temperature in Kelvin, clamped into 1000-40000
    #[arg(short, long)]
    kelvin: f64,

    /// Print the byte triple instead of unit-range floats
    #[arg(short, long)]
    bytes: bool,
}

pub fn command(cfg: Config) {
    let color = kelvin_to_rgb(cfg.kelvin);
    if cfg.bytes {
        println!("{}", color);
    } else {
        let [r, g, b] = color.channels();
        println!("{}, {}, {}", r, g, b);
    }
}
