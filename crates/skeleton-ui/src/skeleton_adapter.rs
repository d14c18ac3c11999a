use std::rc::Rc;

use indexmap::IndexSet;
use skeleton_animation::Shimmer;
use skeleton_core::{InflateError, Inflater, TemplateId, ViewId, ViewTree};
use skeleton_foundation::{ListAdapter, ShimmerFrame, ViewType};

use crate::placeholder::inflate_placeholder;
use crate::{PlaceholderConfig, RowSource};

/// Placeholder data source reporting a synthetic item count.
///
/// Every position maps to a row template through its [`RowSource`]; each
/// distinct template gets its own [`ViewType`], numbered in the order the
/// templates first appear. With shimmer enabled every row is wrapped in a
/// [`ShimmerFrame`] that runs its own animation instance.
pub struct SkeletonAdapter {
    inflater: Rc<dyn Inflater>,
    item_count: usize,
    rows: RowSource,
    view_types: IndexSet<TemplateId>,
    shimmer: Option<Shimmer>,
}

impl SkeletonAdapter {
    /// `shimmer` is only used when the config enables shimmer.
    pub fn new(inflater: Rc<dyn Inflater>, config: &PlaceholderConfig, shimmer: Shimmer) -> Self {
        let rows = config.row_source();
        let view_types = rows.templates().iter().copied().collect();
        Self {
            inflater,
            item_count: config.item_count,
            rows,
            view_types,
            shimmer: config.shimmer.enabled.then_some(shimmer),
        }
    }

    pub fn row_source(&self) -> &RowSource {
        &self.rows
    }

    /// Shimmer applied to bound rows, `None` when rows are not decorated.
    pub fn shimmer(&self) -> Option<Shimmer> {
        self.shimmer
    }

    pub fn template_for(&self, position: usize) -> TemplateId {
        self.rows.resolve(position)
    }

    pub fn view_type_of(&self, template: TemplateId) -> Option<ViewType> {
        self.view_types
            .get_index_of(&template)
            .map(|index| ViewType(index as u32))
    }

    pub fn template_of(&self, view_type: ViewType) -> Option<TemplateId> {
        self.view_types.get_index(view_type.0 as usize).copied()
    }

    /// Number of distinct view types this adapter hands out.
    pub fn view_type_count(&self) -> usize {
        self.view_types.len()
    }
}

impl ListAdapter for SkeletonAdapter {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn item_id(&self, position: usize) -> u64 {
        position as u64
    }

    fn item_view_type(&self, position: usize) -> ViewType {
        self.view_type_of(self.template_for(position))
            .unwrap_or(ViewType::DEFAULT)
    }

    fn create_row(
        &self,
        tree: &mut ViewTree,
        parent: ViewId,
        view_type: ViewType,
    ) -> Result<ViewId, InflateError> {
        let template = self.template_of(view_type).unwrap_or_else(|| {
            log::warn!("SkeletonAdapter: unknown {view_type:?}, using the primary template");
            self.rows.primary()
        });
        let frame = self.shimmer.map(ShimmerFrame::new);
        inflate_placeholder(tree, &*self.inflater, template, parent, frame)
    }

    fn bind_row(&self, tree: &mut ViewTree, row: ViewId, position: usize) {
        let Some(shimmer) = self.shimmer else {
            return;
        };
        let bound = tree.with_view(row, |frame: &mut ShimmerFrame| {
            frame.set_shimmer(shimmer);
            frame.start_shimmer();
        });
        if let Err(err) = bound {
            log::warn!("SkeletonAdapter: row {row} at position {position} has no shimmer: {err}");
        }
    }
}

#[cfg(test)]
#[path = "tests/skeleton_adapter_tests.rs"]
mod tests;
