pub mod kelvin;
pub mod normalize;
pub mod palette;
