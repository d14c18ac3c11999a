//! Pure data for drawing skeleton placeholders
//!
//! This crate contains the color type, the symbolic color references that
//! builders accept, the resolver seam that turns those references into
//! concrete colors, and the unit types shared by layout params.

mod color;
mod unit;

pub use color::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::{Color, ColorRef, ColorResolver, Palette};
    pub use crate::unit::Dp;
}
