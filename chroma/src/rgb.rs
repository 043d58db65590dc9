use std::fmt;
use std::str::FromStr;

use crate::error::{ChromaError, Result};

/// A color whose channels are all normalized into [0.0, 1.0].
///
/// Values are only built through validated paths, so the range invariant
/// holds for every `Rgb` in the program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    // Callers must guarantee every channel is already in [0.0, 1.0].
    pub(crate) const fn new_unchecked(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Rgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Scale each channel back to byte range, the form byte-oriented
    /// host APIs take. Rounds so that `from_bytes` round-trips exactly.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_bytes();
        write!(f, "{}, {}, {}", r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        normalize_rgb(RgbInput::Text(s.to_string()))
    }
}

/// The three input shapes `normalize_rgb` accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum RgbInput {
    /// `"R, G, B"` with integer tokens.
    Text(String),
    /// Byte-range integers, validated into [0, 255].
    Bytes(i64, i64, i64),
    /// Channels already in [0.0, 1.0], returned unchanged.
    Unit(f64, f64, f64),
}

/// Normalize an RGB triple into unit range.
///
/// Byte and text forms divide each channel by 255.0; the unit form is the
/// identity. Any shape or range violation is an error, never a clamp.
pub fn normalize_rgb(input: RgbInput) -> Result<Rgb> {
    match input {
        RgbInput::Text(s) => {
            let (r, g, b) = parse_triple(&s)?;
            from_byte_values(r, g, b)
        }
        RgbInput::Bytes(r, g, b) => from_byte_values(r, g, b),
        RgbInput::Unit(r, g, b) => {
            for v in [r, g, b] {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ChromaError::Range(format!(
                        "Unit channel must be in [0.0,1.0] got:{:?}",
                        v
                    )));
                }
            }
            Ok(Rgb::new_unchecked(r, g, b))
        }
    }
}

fn parse_triple(s: &str) -> Result<(i64, i64, i64)> {
    let values: Vec<i64> = s
        .split(',')
        .map(|t| {
            t.trim().parse::<i64>().map_err(|_| {
                ChromaError::Parse(format!("RGB token is not an integer got:{:?}", t))
            })
        })
        .collect::<Result<Vec<i64>>>()?;
    if values.len() != 3 {
        return Err(ChromaError::Parse(format!(
            "RGB text needs 3 tokens got:{:?}",
            s
        )));
    }
    Ok((values[0], values[1], values[2]))
}

fn from_byte_values(r: i64, g: i64, b: i64) -> Result<Rgb> {
    for v in [r, g, b] {
        if !(0..=255).contains(&v) {
            return Err(ChromaError::Range(format!(
                "RGB channel must be in [0,255] got:{:?}",
                v
            )));
        }
    }
    Ok(Rgb::from_bytes(r as u8, g as u8, b as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_divide_exactly() {
        let c = normalize_rgb(RgbInput::Bytes(0, 128, 255)).unwrap();
        assert_eq!(c.r(), 0.0);
        assert_eq!(c.g(), 128.0 / 255.0);
        assert_eq!(c.b(), 1.0);
    }

    #[test]
    fn test_text_equals_bytes() {
        let from_text = normalize_rgb(RgbInput::Text("255, 0, 0".to_string())).unwrap();
        let from_bytes = normalize_rgb(RgbInput::Bytes(255, 0, 0)).unwrap();
        assert_eq!(from_text, from_bytes);

        let spaced = normalize_rgb(RgbInput::Text(" 12 ,34,  56".to_string())).unwrap();
        assert_eq!(spaced, normalize_rgb(RgbInput::Bytes(12, 34, 56)).unwrap());
    }

    #[test]
    fn test_unit_passthrough_identity() {
        let c = normalize_rgb(RgbInput::Unit(0.25, 0.5, 1.0)).unwrap();
        assert_eq!(c.channels(), [0.25, 0.5, 1.0]);
        assert_eq!(normalize_rgb(RgbInput::Unit(0.0, 0.0, 0.0)).unwrap().channels(), [0.0; 3]);
    }

    #[test]
    fn test_byte_out_of_range() {
        assert!(normalize_rgb(RgbInput::Bytes(256, 0, 0)).is_err());
        assert!(normalize_rgb(RgbInput::Bytes(0, -1, 0)).is_err());
        assert!(normalize_rgb(RgbInput::Text("0, 0, 256".to_string())).is_err());
    }

    #[test]
    fn test_unit_out_of_range() {
        assert!(normalize_rgb(RgbInput::Unit(1.1, 0.0, 0.0)).is_err());
        assert!(normalize_rgb(RgbInput::Unit(0.0, -0.5, 0.0)).is_err());
    }

    #[test]
    fn test_malformed_text() {
        assert!(normalize_rgb(RgbInput::Text("255, 0".to_string())).is_err());
        assert!(normalize_rgb(RgbInput::Text("1, 2, 3, 4".to_string())).is_err());
        assert!(normalize_rgb(RgbInput::Text("red, green, blue".to_string())).is_err());
        assert!(normalize_rgb(RgbInput::Text("1.5, 0, 0".to_string())).is_err());
        assert!(normalize_rgb(RgbInput::Text("".to_string())).is_err());
    }

    #[test]
    fn test_from_str_and_display_roundtrip() {
        let c: Rgb = "255, 128, 0".parse().unwrap();
        assert_eq!(c.to_bytes(), (255, 128, 0));
        assert_eq!(c.to_string(), "255, 128, 0");
        assert_eq!(c.to_string().parse::<Rgb>().unwrap(), c);
    }

    #[test]
    fn test_to_bytes_roundtrips_every_byte_exactly() {
        for v in [0u8, 1, 19, 66, 127, 254, 255] {
            let c = Rgb::from_bytes(v, v, v);
            assert_eq!(c.to_bytes(), (v, v, v));
        }
    }
}
