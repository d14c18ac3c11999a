//! Color representation and symbolic color resolution

use std::borrow::Cow;

use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `0xAARRGGBB`, the packed form theme tables are usually written in.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);

    /// Fill of the placeholder blocks underneath the sweep.
    pub const SHIMMER_BASE: Color = Color::from_argb_u32(0xFFDD_DDDD);
    /// Color of the moving highlight band.
    pub const SHIMMER_HIGHLIGHT: Color = Color::from_argb_u32(0xFFF5_F5F5);
}

/// A color as a builder receives it, before it is resolved against a theme.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorRef {
    /// The theme's shimmer base color.
    ShimmerBase,
    /// The theme's shimmer highlight color.
    ShimmerHighlight,
    /// A named theme entry.
    Named(Cow<'static, str>),
    /// An already concrete color.
    Literal(Color),
}

impl ColorRef {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        ColorRef::Named(name.into())
    }
}

impl From<Color> for ColorRef {
    fn from(color: Color) -> Self {
        ColorRef::Literal(color)
    }
}

/// Turns symbolic color references into concrete colors.
///
/// Implemented by whatever owns the theme in the host environment. Resolution
/// never fails: unknown references map to some color chosen by the resolver.
pub trait ColorResolver {
    fn resolve_color(&self, color: &ColorRef) -> Color;
}

/// Table backed resolver with the shimmer defaults preinstalled.
#[derive(Clone, Debug)]
pub struct Palette {
    shimmer_base: Color,
    shimmer_highlight: Color,
    named: FxHashMap<String, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            shimmer_base: Color::SHIMMER_BASE,
            shimmer_highlight: Color::SHIMMER_HIGHLIGHT,
            named: FxHashMap::default(),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shimmer_base(mut self, color: Color) -> Self {
        self.shimmer_base = color;
        self
    }

    pub fn with_shimmer_highlight(mut self, color: Color) -> Self {
        self.shimmer_highlight = color;
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, color: Color) -> Self {
        self.named.insert(name.into(), color);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) -> Option<Color> {
        self.named.insert(name.into(), color)
    }

    pub fn get(&self, name: &str) -> Option<Color> {
        self.named.get(name).copied()
    }
}

impl ColorResolver for Palette {
    fn resolve_color(&self, color: &ColorRef) -> Color {
        match color {
            ColorRef::ShimmerBase => self.shimmer_base,
            ColorRef::ShimmerHighlight => self.shimmer_highlight,
            ColorRef::Literal(color) => *color,
            ColorRef::Named(name) => match self.named.get(name.as_ref()) {
                Some(color) => *color,
                None => {
                    log::warn!("Palette: no color named {name:?}, using transparent");
                    Color::TRANSPARENT
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
