//! Named unit-range colors used when tinting outliner entries and light
//! gizmos.

use crate::rgb::Rgb;

pub const JASPER: Rgb = Rgb::new_unchecked(0.84, 0.41, 0.33);
pub const CORAL: Rgb = Rgb::new_unchecked(0.97, 0.53, 0.39);
pub const BITTERSWEET: Rgb = Rgb::new_unchecked(1.00, 0.35, 0.37);
pub const BLUSH: Rgb = Rgb::new_unchecked(0.92, 0.39, 0.55);
pub const SUNGLOW: Rgb = Rgb::new_unchecked(1.00, 0.79, 0.23);
pub const SELECTIVE_YELLOW: Rgb = Rgb::new_unchecked(1.00, 0.72, 0.01);
pub const YELLOW_GREEN: Rgb = Rgb::new_unchecked(0.54, 0.79, 0.15);
pub const MINT_CREAM: Rgb = Rgb::new_unchecked(0.94, 0.97, 0.96);
pub const GOOGLE_BLUE: Rgb = Rgb::new_unchecked(0.26, 0.52, 0.96);
pub const GOOGLE_RED: Rgb = Rgb::new_unchecked(0.86, 0.27, 0.22);
pub const ROSE: Rgb = Rgb::new_unchecked(0.97, 0.15, 0.52);
pub const GRAPE: Rgb = Rgb::new_unchecked(0.45, 0.04, 0.72);
pub const MERMAID_TAIL: Rgb = Rgb::new_unchecked(0.30, 0.88, 0.71);
pub const UNREAL_NEON_PURPLE: Rgb = Rgb::new_unchecked(0.73, 0.49, 0.95);
pub const UNREAL_BLUE: Rgb = Rgb::new_unchecked(0.06, 0.07, 0.15);
pub const CHINESE_BLACK: Rgb = Rgb::new_unchecked(0.08, 0.08, 0.08);
pub const ECLIPSE_BLACK: Rgb = Rgb::new_unchecked(0.07, 0.07, 0.07);

pub const ALL: [(&str, Rgb); 17] = [
    ("jasper", JASPER),
    ("coral", CORAL),
    ("bittersweet", BITTERSWEET),
    ("blush", BLUSH),
    ("sunglow", SUNGLOW),
    ("selective_yellow", SELECTIVE_YELLOW),
    ("yellow_green", YELLOW_GREEN),
    ("mint_cream", MINT_CREAM),
    ("google_blue", GOOGLE_BLUE),
    ("google_red", GOOGLE_RED),
    ("rose", ROSE),
    ("grape", GRAPE),
    ("mermaid_tail", MERMAID_TAIL),
    ("unreal_neon_purple", UNREAL_NEON_PURPLE),
    ("unreal_blue", UNREAL_BLUE),
    ("chinese_black", CHINESE_BLACK),
    ("eclipse_black", ECLIPSE_BLACK),
];

/// Look up a palette color by its name.
pub fn by_name(name: &str) -> Option<Rgb> {
    ALL.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
}
