pub mod error;
pub mod palette;
pub mod rgb;
pub mod temperature;

pub use error::{ChromaError, Result};
pub use rgb::{normalize_rgb, Rgb, RgbInput};
pub use temperature::kelvin_to_rgb;
