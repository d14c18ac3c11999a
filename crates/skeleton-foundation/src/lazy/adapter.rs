use skeleton_core::{InflateError, ViewId, ViewTree};

/// Tag deciding which recycled rows may be reused for which positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ViewType(pub u32);

impl ViewType {
    pub const DEFAULT: ViewType = ViewType(0);
}

/// Data source of a virtualized list.
///
/// The list asks for the item count and per-position view types, creates
/// rows through [`ListAdapter::create_row`] only when no recycled row of the
/// same type is available, and calls [`ListAdapter::bind_row`] every time a
/// row is shown for a position.
pub trait ListAdapter {
    /// The total number of items (visible or not).
    fn item_count(&self) -> usize;

    /// Stable identifier of the item at `position`. Defaults to the position.
    fn item_id(&self, position: usize) -> u64 {
        position as u64
    }

    /// Recycling tag for `position`. Rows with equal tags are interchangeable.
    fn item_view_type(&self, position: usize) -> ViewType {
        let _ = position;
        ViewType::DEFAULT
    }

    /// Builds a detached row for `view_type`; `parent` is the list container.
    fn create_row(
        &self,
        tree: &mut ViewTree,
        parent: ViewId,
        view_type: ViewType,
    ) -> Result<ViewId, InflateError>;

    /// Fills `row` with the content of `position`.
    fn bind_row(&self, tree: &mut ViewTree, row: ViewId, position: usize);
}
