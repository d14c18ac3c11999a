use std::rc::Rc;

use skeleton_animation::Shimmer;
use skeleton_core::{Inflater, Owned, TemplateId, ViewId, ViewTree};
use skeleton_foundation::ShimmerFrame;
use skeleton_graphics::{ColorResolver, Palette};

use crate::placeholder::{dispose, inflate_placeholder};
use crate::{PlaceholderConfig, SkeletonScreen, ViewReplacer};

/// Shows a placeholder in the slot of a single view.
///
/// `show` inflates a fresh placeholder every time and swaps it into the
/// view's slot; `hide` puts the view back and frees the placeholder. With
/// shimmer enabled the placeholder is a [`ShimmerFrame`] that restarts its
/// sweep whenever it is attached again.
pub struct ViewSkeletonScreen {
    tree: Owned<ViewTree>,
    inflater: Rc<dyn Inflater>,
    replacer: ViewReplacer,
    template: TemplateId,
    shimmer_enabled: bool,
    shimmer: Shimmer,
}

impl ViewSkeletonScreen {
    fn new(builder: ViewSkeletonBuilder) -> Self {
        let shimmer = builder.generate_shimmer();
        Self {
            replacer: ViewReplacer::new(builder.view),
            template: builder.config.template,
            shimmer_enabled: builder.config.shimmer.enabled,
            shimmer,
            tree: builder.tree,
            inflater: builder.inflater,
        }
    }

    pub fn source_view(&self) -> ViewId {
        self.replacer.source_view()
    }

    /// The placeholder currently in the slot.
    pub fn placeholder(&self) -> Option<ViewId> {
        self.replacer
            .is_replaced()
            .then(|| self.replacer.target_view())
    }

    pub fn is_showing(&self) -> bool {
        self.replacer.is_replaced()
    }

    pub fn shimmer(&self) -> Shimmer {
        self.shimmer
    }

    fn build_placeholder(&self, tree: &mut ViewTree) -> Option<ViewId> {
        let source = self.replacer.source_view();
        let parent = match self.replacer.slot() {
            Some((container, _)) => Some(container),
            None => tree.parent_of(source),
        };
        let Some(parent) = parent else {
            log::error!("ViewSkeletonScreen: source view {source} is not attached to any container");
            return None;
        };

        let frame = self
            .shimmer_enabled
            .then(|| ShimmerFrame::new(self.shimmer).restarting_on_attach());
        let placeholder =
            match inflate_placeholder(tree, &*self.inflater, self.template, parent, frame) {
                Ok(view) => view,
                Err(err) => {
                    log::error!("ViewSkeletonScreen: cannot build placeholder: {err}");
                    return None;
                }
            };
        if self.shimmer_enabled {
            let _ = tree.with_view(placeholder, |frame: &mut ShimmerFrame| frame.start_shimmer());
        }
        Some(placeholder)
    }
}

impl SkeletonScreen for ViewSkeletonScreen {
    fn show(&mut self) {
        let tree_handle = self.tree.clone();
        let mut tree = tree_handle.borrow_mut();
        let Some(placeholder) = self.build_placeholder(&mut tree) else {
            return;
        };

        match self.replacer.replace(&mut *tree, placeholder) {
            Some(displaced) => {
                if displaced != self.replacer.source_view() {
                    dispose(&mut tree, displaced);
                }
                log::debug!(
                    "ViewSkeletonScreen: showing placeholder {placeholder} for view {}",
                    self.replacer.source_view()
                );
            }
            None => dispose(&mut tree, placeholder),
        }
    }

    fn hide(&mut self) {
        if !self.replacer.is_replaced() {
            return;
        }
        let tree_handle = self.tree.clone();
        let mut tree = tree_handle.borrow_mut();

        let target = self.replacer.target_view();
        if tree.is_view::<ShimmerFrame>(target) {
            let _ = tree.with_view(target, |frame: &mut ShimmerFrame| frame.stop_shimmer());
        }
        if let Some(placeholder) = self.replacer.restore(&mut *tree) {
            dispose(&mut tree, placeholder);
            log::debug!(
                "ViewSkeletonScreen: restored view {}",
                self.replacer.source_view()
            );
        }
    }
}

/// Collects the settings of a [`ViewSkeletonScreen`].
pub struct ViewSkeletonBuilder {
    tree: Owned<ViewTree>,
    view: ViewId,
    inflater: Rc<dyn Inflater>,
    resolver: Rc<dyn ColorResolver>,
    config: PlaceholderConfig,
}

impl ViewSkeletonBuilder {
    pub fn new(tree: Owned<ViewTree>, view: ViewId, inflater: Rc<dyn Inflater>) -> Self {
        Self {
            tree,
            view,
            inflater,
            resolver: Rc::new(Palette::default()),
            config: PlaceholderConfig::default(),
        }
    }

    impl_placeholder_builder!();

    pub fn build(self) -> ViewSkeletonScreen {
        ViewSkeletonScreen::new(self)
    }

    /// Builds the screen and shows it right away.
    pub fn show(self) -> ViewSkeletonScreen {
        let mut screen = self.build();
        screen.show();
        screen
    }
}

#[cfg(test)]
#[path = "tests/view_skeleton_tests.rs"]
mod tests;
