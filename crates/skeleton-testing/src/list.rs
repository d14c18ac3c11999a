use std::cell::{Cell, RefCell};
use std::rc::Rc;

use skeleton_core::{InflateError, Leaf, LayoutParams, ViewId, ViewTree};
use skeleton_foundation::{ListAdapter, ListHost, SharedAdapter};

/// Stand-in for a real data source with a fixed number of items.
pub struct FixedAdapter {
    count: usize,
    created: Cell<usize>,
    bound: RefCell<Vec<usize>>,
}

impl FixedAdapter {
    pub fn new(count: usize) -> Rc<Self> {
        Rc::new(Self {
            count,
            created: Cell::new(0),
            bound: RefCell::new(Vec::new()),
        })
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn bound_positions(&self) -> Vec<usize> {
        self.bound.borrow().clone()
    }
}

impl ListAdapter for FixedAdapter {
    fn item_count(&self) -> usize {
        self.count
    }

    fn create_row(
        &self,
        tree: &mut ViewTree,
        _parent: ViewId,
        _view_type: skeleton_foundation::ViewType,
    ) -> Result<ViewId, InflateError> {
        self.created.set(self.created.get() + 1);
        Ok(tree.create_with_params(Box::new(Leaf::new("item")), LayoutParams::row(56.0)))
    }

    fn bind_row(&self, _tree: &mut ViewTree, _row: ViewId, position: usize) {
        self.bound.borrow_mut().push(position);
    }
}

/// List host without rows that records what a skeleton screen does to it.
#[derive(Default)]
pub struct RecordingListHost {
    adapter: Option<SharedAdapter>,
    frozen: bool,
    computing_layout: bool,
    freeze_calls: Vec<bool>,
    adapter_installs: usize,
}

impl RecordingListHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adapter(adapter: SharedAdapter) -> Self {
        Self {
            adapter: Some(adapter),
            ..Self::default()
        }
    }

    /// Pretend a layout pass is (or is no longer) in progress.
    pub fn set_computing_layout(&mut self, computing: bool) {
        self.computing_layout = computing;
    }

    pub fn freeze_calls(&self) -> &[bool] {
        &self.freeze_calls
    }

    pub fn adapter_installs(&self) -> usize {
        self.adapter_installs
    }

    pub fn item_count(&self) -> usize {
        self.adapter
            .as_ref()
            .map(|adapter| adapter.item_count())
            .unwrap_or(0)
    }
}

impl ListHost for RecordingListHost {
    fn adapter(&self) -> Option<SharedAdapter> {
        self.adapter.clone()
    }

    fn set_adapter(&mut self, adapter: Option<SharedAdapter>) {
        self.adapter = adapter;
        self.frozen = false;
        self.adapter_installs += 1;
    }

    fn is_computing_layout(&self) -> bool {
        self.computing_layout
    }

    fn set_layout_frozen(&mut self, frozen: bool) {
        self.freeze_calls.push(frozen);
        self.frozen = frozen;
    }

    fn is_layout_frozen(&self) -> bool {
        self.frozen
    }
}
