//! Layout params carried by views through swaps.

use skeleton_graphics::Dp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    MatchParent,
    WrapContent,
    Fixed(Dp),
}

/// Size request a view makes of its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    pub const fn wrap_content() -> Self {
        Self::new(Dimension::WrapContent, Dimension::WrapContent)
    }

    pub const fn match_parent() -> Self {
        Self::new(Dimension::MatchParent, Dimension::MatchParent)
    }

    /// Full width row of a fixed height, the usual shape of a list row.
    pub const fn row(height: f32) -> Self {
        Self::new(Dimension::MatchParent, Dimension::Fixed(Dp(height)))
    }

    pub const fn fixed(width: f32, height: f32) -> Self {
        Self::new(Dimension::Fixed(Dp(width)), Dimension::Fixed(Dp(height)))
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::wrap_content()
    }
}
