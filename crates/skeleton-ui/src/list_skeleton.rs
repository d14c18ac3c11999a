use std::rc::Rc;

use skeleton_core::{Inflater, Owned, TemplateId};
use skeleton_foundation::lazy::same_adapter;
use skeleton_foundation::{ListAdapter, ListHost, SharedAdapter};
use skeleton_graphics::{ColorResolver, Palette};

use crate::{PlaceholderConfig, SkeletonAdapter, SkeletonScreen};

/// Shows placeholder rows by swapping the adapter of a list.
///
/// The real adapter is either given to the builder or taken from the list
/// on the first `show`. While shown, the list layout is frozen if the
/// config asks for it and the list is not in the middle of a layout pass;
/// a freeze skipped that way is not retried.
pub struct ListSkeletonScreen<L: ListHost> {
    list: Owned<L>,
    actual: Option<SharedAdapter>,
    actual_supplied: bool,
    skeleton: Rc<SkeletonAdapter>,
    frozen: bool,
    showing: bool,
}

impl<L: ListHost> ListSkeletonScreen<L> {
    fn new(builder: ListSkeletonBuilder<L>) -> Self {
        let shimmer = builder.generate_shimmer();
        let skeleton = Rc::new(SkeletonAdapter::new(
            builder.inflater,
            &builder.config,
            shimmer,
        ));
        Self {
            list: builder.list,
            actual_supplied: builder.actual.is_some(),
            actual: builder.actual,
            skeleton,
            frozen: builder.config.frozen,
            showing: false,
        }
    }

    pub fn list(&self) -> &Owned<L> {
        &self.list
    }

    pub fn skeleton_adapter(&self) -> Rc<SkeletonAdapter> {
        Rc::clone(&self.skeleton)
    }

    /// Adapter reinstalled by `hide`.
    pub fn actual_adapter(&self) -> Option<SharedAdapter> {
        self.actual.clone()
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }
}

impl<L: ListHost> SkeletonScreen for ListSkeletonScreen<L> {
    fn show(&mut self) {
        let skeleton: SharedAdapter = self.skeleton.clone();
        let mut list = self.list.borrow_mut();

        if !self.actual_supplied {
            let current = list.adapter();
            if !same_adapter(current.as_ref(), Some(&skeleton)) {
                self.actual = current;
            }
        }

        list.set_adapter(Some(skeleton));
        if self.frozen {
            if list.is_computing_layout() {
                log::debug!("ListSkeletonScreen: list is computing a layout, not freezing");
            } else {
                list.set_layout_frozen(true);
            }
        }
        self.showing = true;
        log::debug!(
            "ListSkeletonScreen: showing {} placeholder rows",
            self.skeleton.item_count()
        );
    }

    fn hide(&mut self) {
        if !self.showing {
            return;
        }
        self.list.borrow_mut().set_adapter(self.actual.clone());
        self.showing = false;
        log::debug!("ListSkeletonScreen: restored the real adapter");
    }
}

/// Collects the settings of a [`ListSkeletonScreen`].
pub struct ListSkeletonBuilder<L: ListHost> {
    list: Owned<L>,
    inflater: Rc<dyn Inflater>,
    resolver: Rc<dyn ColorResolver>,
    actual: Option<SharedAdapter>,
    config: PlaceholderConfig,
}

impl<L: ListHost> ListSkeletonBuilder<L> {
    pub fn new(list: Owned<L>, inflater: Rc<dyn Inflater>) -> Self {
        Self {
            list,
            inflater,
            resolver: Rc::new(Palette::default()),
            actual: None,
            config: PlaceholderConfig::default(),
        }
    }

    impl_placeholder_builder!();

    /// Row templates cycled by position. Takes precedence over
    /// [`Self::load`] unless empty.
    pub fn load_array(mut self, templates: impl IntoIterator<Item = TemplateId>) -> Self {
        self.config.templates = templates.into_iter().collect();
        self
    }

    /// Number of placeholder rows.
    pub fn count(mut self, item_count: usize) -> Self {
        self.config.item_count = item_count;
        self
    }

    /// The real adapter to install on `hide`.
    pub fn adapter(mut self, adapter: SharedAdapter) -> Self {
        self.actual = Some(adapter);
        self
    }

    /// Whether to freeze the list layout while placeholders are shown.
    pub fn frozen(mut self, frozen: bool) -> Self {
        self.config.frozen = frozen;
        self
    }

    pub fn build(self) -> ListSkeletonScreen<L> {
        ListSkeletonScreen::new(self)
    }

    /// Builds the screen and shows it right away.
    pub fn show(self) -> ListSkeletonScreen<L> {
        let mut screen = self.build();
        screen.show();
        screen
    }
}

#[cfg(test)]
#[path = "tests/list_skeleton_tests.rs"]
mod tests;
