//! Shimmer support for skeleton placeholders.
//!
//! [`Shimmer`] is the immutable description of a sweep (colors, shape,
//! direction, timing). [`ShimmerAnimation`] is a running instance of one,
//! advanced by host frames. How the sweep is painted is left to the renderer.

mod animation;
mod shimmer;

pub use animation::ShimmerAnimation;
pub use shimmer::{Direction, Highlight, Shape, Shimmer, ShimmerBuilder};
