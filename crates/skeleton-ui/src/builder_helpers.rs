//! Builder methods shared by the view and list skeleton builders.
//!
//! Both builders carry a `config: PlaceholderConfig` and a
//! `resolver: Rc<dyn ColorResolver>` field; the macro expands to the setters
//! that only touch those two.

macro_rules! impl_placeholder_builder {
    () => {
        /// Row template of the placeholder.
        pub fn load(mut self, template: ::skeleton_core::TemplateId) -> Self {
            self.config.template = template;
            self
        }

        /// Whether placeholders are wrapped in a shimmer frame.
        pub fn shimmer(mut self, enabled: bool) -> Self {
            self.config.shimmer.enabled = enabled;
            self
        }

        /// Time the highlight takes to cross the placeholder once.
        pub fn duration(mut self, duration_millis: u64) -> Self {
            self.config.shimmer.duration_millis = duration_millis;
            self
        }

        /// Highlight color of a colored shimmer.
        pub fn color(mut self, color: impl Into<::skeleton_graphics::ColorRef>) -> Self {
            self.config.shimmer.highlight_color = color.into();
            self
        }

        pub fn base_color(mut self, color: impl Into<::skeleton_graphics::ColorRef>) -> Self {
            self.config.shimmer.base_color = color.into();
            self
        }

        /// Colored highlight when true, alpha highlight otherwise.
        pub fn colored(mut self, colored: bool) -> Self {
            self.config.shimmer.colored = colored;
            self
        }

        pub fn shape(mut self, shape: ::skeleton_animation::Shape) -> Self {
            self.config.shimmer.shape = shape;
            self
        }

        pub fn direction(mut self, direction: ::skeleton_animation::Direction) -> Self {
            self.config.shimmer.direction = direction;
            self
        }

        pub fn auto_start(mut self, auto_start: bool) -> Self {
            self.config.shimmer.auto_start = auto_start;
            self
        }

        /// Uses `shimmer` as is, overriding the individual shimmer settings.
        pub fn with_shimmer(mut self, shimmer: ::skeleton_animation::Shimmer) -> Self {
            self.config.shimmer.prebuilt = Some(shimmer);
            self
        }

        /// Resolver for the colors given to [`Self::color`] and
        /// [`Self::base_color`]. Defaults to [`skeleton_graphics::Palette`].
        pub fn color_resolver(
            mut self,
            resolver: ::std::rc::Rc<dyn ::skeleton_graphics::ColorResolver>,
        ) -> Self {
            self.resolver = resolver;
            self
        }

        pub fn config(&self) -> &$crate::PlaceholderConfig {
            &self.config
        }

        /// The shimmer a screen built now would use.
        pub fn generate_shimmer(&self) -> ::skeleton_animation::Shimmer {
            self.config.shimmer.generate_shimmer(&*self.resolver)
        }
    };
}
