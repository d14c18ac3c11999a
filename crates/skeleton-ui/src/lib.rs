//! Skeleton screens: placeholders shown while real content loads.
//!
//! Two placement strategies are provided:
//!
//! - [`ViewSkeletonScreen`] swaps a single view for a placeholder in the same
//!   container slot and puts it back on `hide`.
//! - [`ListSkeletonScreen`] swaps the adapter of a list for a
//!   [`SkeletonAdapter`] that reports synthetic placeholder rows, optionally
//!   freezing the list layout while it is active.
//!
//! Both are configured through builders obtained from [`Skeleton`]:
//!
//! ```text
//! let mut screen = Skeleton::bind(tree, view, inflater)
//!     .load(ARTICLE_PLACEHOLDER)
//!     .duration(1200)
//!     .show();
//! // ... content arrives
//! screen.hide();
//! ```

#[macro_use]
mod builder_helpers;

mod config;
mod list_skeleton;
mod placeholder;
mod skeleton_adapter;
mod view_replacer;
mod view_skeleton;

pub use config::{PlaceholderConfig, RowSource, ShimmerOptions};
pub use list_skeleton::{ListSkeletonBuilder, ListSkeletonScreen};
pub use skeleton_adapter::SkeletonAdapter;
pub use view_replacer::ViewReplacer;
pub use view_skeleton::{ViewSkeletonBuilder, ViewSkeletonScreen};

use std::rc::Rc;

use skeleton_core::{Inflater, Owned, ViewId, ViewTree};
use skeleton_foundation::ListHost;

/// A placeholder that can be shown and hidden again.
///
/// Both calls are synchronous and never fail: precondition violations are
/// logged and turn the call into a no-op. Repeating either call is safe.
pub trait SkeletonScreen {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Entry points for building skeleton screens.
pub struct Skeleton;

impl Skeleton {
    /// Placeholder for `view`, which must sit in a container of `tree` by
    /// the time the screen is shown.
    pub fn bind(
        tree: Owned<ViewTree>,
        view: ViewId,
        inflater: Rc<dyn Inflater>,
    ) -> ViewSkeletonBuilder {
        ViewSkeletonBuilder::new(tree, view, inflater)
    }

    /// Placeholder rows for `list`.
    pub fn bind_list<L: ListHost>(list: Owned<L>, inflater: Rc<dyn Inflater>) -> ListSkeletonBuilder<L> {
        ListSkeletonBuilder::new(list, inflater)
    }
}

pub mod prelude {
    pub use crate::{
        ListSkeletonBuilder, ListSkeletonScreen, PlaceholderConfig, RowSource, ShimmerOptions,
        Skeleton, SkeletonAdapter, SkeletonScreen, ViewSkeletonBuilder, ViewSkeletonScreen,
    };
    pub use skeleton_animation::{Direction, Shape, Shimmer, ShimmerBuilder};
    pub use skeleton_core::{Inflater, Owned, TemplateId, TemplateRegistry, ViewId, ViewTree};
    pub use skeleton_foundation::{ListAdapter, ListHost, RecyclerList, SharedAdapter};
    pub use skeleton_graphics::{Color, ColorRef, ColorResolver, Palette};
}
