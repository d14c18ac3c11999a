//! Container capabilities a placement target needs.

use crate::{LayoutParams, TreeError, ViewId};

/// Ordered child access on a view hierarchy.
///
/// Callers must not mutate a tracked container out of band while a skeleton
/// screen is showing; nothing here detects that.
pub trait ContainerHost {
    fn parent_of(&self, view: ViewId) -> Option<ViewId>;

    fn index_of(&self, container: ViewId, view: ViewId) -> Option<usize>;

    fn child_at(&self, container: ViewId, index: usize) -> Option<ViewId>;

    fn add_view_at(
        &mut self,
        container: ViewId,
        view: ViewId,
        index: usize,
    ) -> Result<(), TreeError>;

    fn remove_view(&mut self, container: ViewId, view: ViewId) -> Result<(), TreeError>;

    fn layout_params(&self, view: ViewId) -> Option<LayoutParams>;

    fn set_layout_params(
        &mut self,
        view: ViewId,
        params: Option<LayoutParams>,
    ) -> Result<(), TreeError>;
}
