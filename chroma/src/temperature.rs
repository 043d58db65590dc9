use log::warn;

use crate::rgb::Rgb;

/// Approximate the color of an ideal black-body radiator at `kelvin`.
///
/// Tanner Helland's empirical fit. The temperature is rescaled by 1/100 and
/// clamped into [10.0, 400.0] (1000K to 40000K), so the function is total;
/// out-of-range input is clamped, never rejected. Channel floats are
/// truncated toward zero, not rounded, to keep parity with the published
/// byte tables.
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb {
    if !(1000.0..=40000.0).contains(&kelvin) {
        warn!("kelvin {:?} outside [1000,40000], clamping", kelvin);
    }
    // max-then-min also pins NaN to the lower bound
    let temp = (kelvin / 100.0).max(10.0).min(400.0);

    let red = if temp <= 66.0 {
        255.0
    } else {
        let r = 329.698727446 * (temp - 60.0).powf(-0.1332047592);
        r.max(0.0).min(255.0)
    };

    let green = if temp <= 66.0 {
        99.4708025861 * temp.ln() - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    };
    let green = green.max(0.0).min(255.0);

    let blue = if temp >= 66.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        let b = 138.5177312231 * (temp - 10.0).ln() - 305.0447927307;
        b.max(0.0).min(255.0)
    };

    Rgb::from_bytes(red as u8, green as u8, blue as u8)
}
