use skeleton_animation::{Direction, Shape, Shimmer, ShimmerBuilder};
use skeleton_core::TemplateId;
use skeleton_graphics::{ColorRef, ColorResolver};

/// Which row template each list position uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowSource {
    Single(TemplateId),
    /// Cycled by position. Never empty.
    Multi(Vec<TemplateId>),
}

impl RowSource {
    /// `Multi` when `templates` is non-empty, `Single(single)` otherwise.
    pub fn from_parts(single: TemplateId, templates: &[TemplateId]) -> Self {
        if templates.is_empty() {
            RowSource::Single(single)
        } else {
            RowSource::Multi(templates.to_vec())
        }
    }

    pub fn resolve(&self, position: usize) -> TemplateId {
        match self {
            RowSource::Single(template) => *template,
            RowSource::Multi(templates) => match templates.len() {
                0 => TemplateId::DEFAULT_ROW,
                len => templates[position % len],
            },
        }
    }

    /// Templates in the order they cycle.
    pub fn templates(&self) -> &[TemplateId] {
        match self {
            RowSource::Single(template) => std::slice::from_ref(template),
            RowSource::Multi(templates) => templates,
        }
    }

    /// Template used when nothing more specific applies.
    pub fn primary(&self) -> TemplateId {
        self.templates()
            .first()
            .copied()
            .unwrap_or(TemplateId::DEFAULT_ROW)
    }
}

impl Default for RowSource {
    fn default() -> Self {
        RowSource::Single(TemplateId::DEFAULT_ROW)
    }
}

/// Shimmer settings as collected by a builder.
#[derive(Clone, Debug, PartialEq)]
pub struct ShimmerOptions {
    /// Whether placeholders are wrapped in a shimmer frame at all.
    pub enabled: bool,
    pub base_color: ColorRef,
    pub highlight_color: ColorRef,
    /// Colored highlight when true, alpha highlight otherwise.
    pub colored: bool,
    pub duration_millis: u64,
    pub shape: Shape,
    pub direction: Direction,
    pub auto_start: bool,
    /// Used as is when present; the individual settings above are ignored.
    pub prebuilt: Option<Shimmer>,
}

impl Default for ShimmerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            base_color: ColorRef::ShimmerBase,
            highlight_color: ColorRef::ShimmerHighlight,
            colored: true,
            duration_millis: Shimmer::DEFAULT_DURATION_MILLIS,
            shape: Shape::default(),
            direction: Direction::default(),
            auto_start: true,
            prebuilt: None,
        }
    }
}

impl ShimmerOptions {
    /// Builds the shimmer configuration, resolving colors through `resolver`.
    pub fn generate_shimmer(&self, resolver: &dyn ColorResolver) -> Shimmer {
        if let Some(shimmer) = self.prebuilt {
            return shimmer;
        }
        let builder = if self.colored {
            ShimmerBuilder::colored()
                .base_color(resolver.resolve_color(&self.base_color))
                .highlight_color(resolver.resolve_color(&self.highlight_color))
        } else {
            ShimmerBuilder::alpha()
        };
        builder
            .auto_start(self.auto_start)
            .shape(self.shape)
            .duration_millis(self.duration_millis)
            .direction(self.direction)
            .build()
    }
}

/// Everything a skeleton screen needs to know before `show`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderConfig {
    /// Synthetic item count in list mode.
    pub item_count: usize,
    pub template: TemplateId,
    /// Takes precedence over `template` when non-empty.
    pub templates: Vec<TemplateId>,
    pub shimmer: ShimmerOptions,
    /// Freeze the list layout while the placeholder adapter is active.
    pub frozen: bool,
}

impl PlaceholderConfig {
    pub const DEFAULT_ITEM_COUNT: usize = 10;

    pub fn row_source(&self) -> RowSource {
        RowSource::from_parts(self.template, &self.templates)
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            item_count: Self::DEFAULT_ITEM_COUNT,
            template: TemplateId::DEFAULT_ROW,
            templates: Vec::new(),
            shimmer: ShimmerOptions::default(),
            frozen: true,
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
