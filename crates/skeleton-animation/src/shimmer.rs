use skeleton_graphics::Color;

/// Geometry of the highlight band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Linear,
    Radial,
}

/// Travel direction of the highlight band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    TopToBottom,
    RightToLeft,
    BottomToTop,
}

impl Direction {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::TopToBottom | Direction::BottomToTop)
    }
}

/// How the band is tinted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Highlight {
    /// Explicit base and highlight colors.
    Colored { base: Color, highlight: Color },
    /// Modulates the alpha of the underlying content instead of tinting it.
    Alpha { base_alpha: f32, highlight_alpha: f32 },
}

impl Highlight {
    pub const DEFAULT_BASE_ALPHA: f32 = 0.3;
    pub const DEFAULT_HIGHLIGHT_ALPHA: f32 = 1.0;

    pub fn is_colored(&self) -> bool {
        matches!(self, Highlight::Colored { .. })
    }
}

/// Immutable description of a shimmer sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shimmer {
    pub highlight: Highlight,
    pub shape: Shape,
    pub direction: Direction,
    /// Time for the band to cross the content once.
    pub duration_millis: u64,
    /// Pause between two sweeps.
    pub repeat_delay_millis: u64,
    /// Start as soon as the configuration is installed on a decoration.
    pub auto_start: bool,
}

impl Shimmer {
    pub const DEFAULT_DURATION_MILLIS: u64 = 1000;

    pub fn cycle_millis(&self) -> u64 {
        self.duration_millis + self.repeat_delay_millis
    }
}

impl Default for Shimmer {
    fn default() -> Self {
        ShimmerBuilder::colored().build()
    }
}

/// Fluent construction of a [`Shimmer`], starting from a colored or an
/// alpha highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerBuilder {
    highlight: Highlight,
    shape: Shape,
    direction: Direction,
    duration_millis: u64,
    repeat_delay_millis: u64,
    auto_start: bool,
}

impl ShimmerBuilder {
    fn with_highlight(highlight: Highlight) -> Self {
        Self {
            highlight,
            shape: Shape::default(),
            direction: Direction::default(),
            duration_millis: Shimmer::DEFAULT_DURATION_MILLIS,
            repeat_delay_millis: 0,
            auto_start: true,
        }
    }

    pub fn colored() -> Self {
        Self::with_highlight(Highlight::Colored {
            base: Color::SHIMMER_BASE,
            highlight: Color::SHIMMER_HIGHLIGHT,
        })
    }

    pub fn alpha() -> Self {
        Self::with_highlight(Highlight::Alpha {
            base_alpha: Highlight::DEFAULT_BASE_ALPHA,
            highlight_alpha: Highlight::DEFAULT_HIGHLIGHT_ALPHA,
        })
    }

    pub fn base_color(mut self, color: Color) -> Self {
        match &mut self.highlight {
            Highlight::Colored { base, .. } => *base = color,
            Highlight::Alpha { .. } => log::debug!("ShimmerBuilder: base color ignored for alpha highlight"),
        }
        self
    }

    pub fn highlight_color(mut self, color: Color) -> Self {
        match &mut self.highlight {
            Highlight::Colored { highlight, .. } => *highlight = color,
            Highlight::Alpha { .. } => {
                log::debug!("ShimmerBuilder: highlight color ignored for alpha highlight")
            }
        }
        self
    }

    pub fn base_alpha(mut self, alpha: f32) -> Self {
        if let Highlight::Alpha { base_alpha, .. } = &mut self.highlight {
            *base_alpha = alpha.clamp(0.0, 1.0);
        }
        self
    }

    pub fn highlight_alpha(mut self, alpha: f32) -> Self {
        if let Highlight::Alpha {
            highlight_alpha, ..
        } = &mut self.highlight
        {
            *highlight_alpha = alpha.clamp(0.0, 1.0);
        }
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn duration_millis(mut self, duration_millis: u64) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn repeat_delay_millis(mut self, repeat_delay_millis: u64) -> Self {
        self.repeat_delay_millis = repeat_delay_millis;
        self
    }

    pub fn auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    pub fn build(self) -> Shimmer {
        Shimmer {
            highlight: self.highlight,
            shape: self.shape,
            direction: self.direction,
            duration_millis: self.duration_millis,
            repeat_delay_millis: self.repeat_delay_millis,
            auto_start: self.auto_start,
        }
    }
}

#[cfg(test)]
#[path = "tests/shimmer_tests.rs"]
mod tests;
