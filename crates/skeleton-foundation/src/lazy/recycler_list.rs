use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use skeleton_core::{Owned, ViewId, ViewTree};

use super::{ListAdapter, ListHost, SharedAdapter, ViewType};

#[derive(Clone, Copy, Debug)]
struct BoundRow {
    view: ViewId,
    view_type: ViewType,
}

/// List host that keeps the rows of the first `viewport_rows` positions as
/// children of `container`, in position order.
///
/// Layout only happens when requested: installing an adapter or calling
/// [`RecyclerList::request_layout`] schedules a pass, [`RecyclerList::layout`]
/// runs it. Requests made while the layout is frozen are deferred until it
/// is unfrozen; a pass that was already pending when the freeze began still
/// runs.
///
/// Rows detached by a pass go to a pool keyed by [`ViewType`]. Installing a
/// new adapter disposes both the bound rows and the pool, since view types
/// only mean something to the adapter that produced them.
pub struct RecyclerList {
    tree: Owned<ViewTree>,
    container: ViewId,
    viewport_rows: usize,
    adapter: Option<SharedAdapter>,
    frozen: bool,
    computing_layout: bool,
    layout_requested: bool,
    layout_deferred: bool,
    rows: Vec<BoundRow>,
    pool: FxHashMap<ViewType, SmallVec<[ViewId; 4]>>,
}

impl RecyclerList {
    pub fn new(tree: Owned<ViewTree>, container: ViewId, viewport_rows: usize) -> Self {
        Self {
            tree,
            container,
            viewport_rows,
            adapter: None,
            frozen: false,
            computing_layout: false,
            layout_requested: false,
            layout_deferred: false,
            rows: Vec::new(),
            pool: FxHashMap::default(),
        }
    }

    pub fn container(&self) -> ViewId {
        self.container
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Item count reported by the active adapter, zero without one.
    pub fn item_count(&self) -> usize {
        self.adapter
            .as_ref()
            .map(|adapter| adapter.item_count())
            .unwrap_or(0)
    }

    /// Views of the bound rows, in position order.
    pub fn rows(&self) -> Vec<ViewId> {
        self.rows.iter().map(|row| row.view).collect()
    }

    pub fn pooled(&self, view_type: ViewType) -> usize {
        self.pool.get(&view_type).map(|views| views.len()).unwrap_or(0)
    }

    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    pub fn request_layout(&mut self) {
        if self.frozen {
            self.layout_deferred = true;
        } else {
            self.layout_requested = true;
        }
    }

    /// Runs the pending layout pass, if any. Returns whether a pass ran.
    pub fn layout(&mut self) -> bool {
        if !self.layout_requested {
            if self.layout_deferred {
                log::trace!("RecyclerList: layout deferred while frozen");
            }
            return false;
        }
        self.layout_requested = false;
        self.computing_layout = true;

        let tree_handle = self.tree.clone();
        let mut tree = tree_handle.borrow_mut();

        let Some(adapter) = self.adapter.clone() else {
            for row in std::mem::take(&mut self.rows) {
                self.recycle(&mut tree, row);
            }
            self.computing_layout = false;
            return true;
        };

        let count = adapter.item_count().min(self.viewport_rows);
        let mut position = 0;
        while position < count {
            let view_type = adapter.item_view_type(position);
            let reusable = self
                .rows
                .get(position)
                .is_some_and(|row| row.view_type == view_type);

            if !reusable {
                if position < self.rows.len() {
                    let stale = self.rows.remove(position);
                    self.recycle(&mut tree, stale);
                }
                let view = match self.obtain(&mut tree, &*adapter, view_type) {
                    Ok(view) => view,
                    Err(err) => {
                        log::warn!("RecyclerList: could not create row {position}: {err}");
                        break;
                    }
                };
                if let Err(err) = tree.add_view_at(self.container, view, position) {
                    log::warn!("RecyclerList: could not place row {position}: {err}");
                    let _ = tree.remove(view);
                    break;
                }
                self.rows.insert(position, BoundRow { view, view_type });
            }

            adapter.bind_row(&mut tree, self.rows[position].view, position);
            position += 1;
        }

        while self.rows.len() > position {
            if let Some(row) = self.rows.pop() {
                self.recycle(&mut tree, row);
            }
        }

        log::trace!(
            "RecyclerList: laid out {position} of {} items",
            adapter.item_count()
        );
        self.computing_layout = false;
        true
    }

    fn obtain(
        &mut self,
        tree: &mut ViewTree,
        adapter: &dyn ListAdapter,
        view_type: ViewType,
    ) -> Result<ViewId, skeleton_core::InflateError> {
        if let Some(view) = self.pool.get_mut(&view_type).and_then(|views| views.pop()) {
            log::trace!("RecyclerList: reusing view {view} for {view_type:?}");
            return Ok(view);
        }
        adapter.create_row(tree, self.container, view_type)
    }

    fn recycle(&mut self, tree: &mut ViewTree, row: BoundRow) {
        if let Err(err) = tree.remove_view(self.container, row.view) {
            log::warn!("RecyclerList: row {} was not in the list: {err}", row.view);
        }
        self.pool.entry(row.view_type).or_default().push(row.view);
    }

    fn dispose_rows(&mut self) {
        let tree_handle = self.tree.clone();
        let mut tree = tree_handle.borrow_mut();
        for row in std::mem::take(&mut self.rows) {
            let _ = tree.remove(row.view);
        }
        for (_, views) in self.pool.drain() {
            for view in views {
                let _ = tree.remove(view);
            }
        }
    }
}

impl ListHost for RecyclerList {
    fn adapter(&self) -> Option<SharedAdapter> {
        self.adapter.clone()
    }

    fn set_adapter(&mut self, adapter: Option<SharedAdapter>) {
        self.set_layout_frozen(false);
        self.dispose_rows();
        self.adapter = adapter;
        self.request_layout();
    }

    /// Only true inside [`RecyclerList::layout`]. The pass runs while the
    /// list's `Owned` handle is mutably borrowed, so a skeleton screen that
    /// holds the same handle cannot observe it; calling `show` from inside a
    /// pass fails the borrow instead.
    fn is_computing_layout(&self) -> bool {
        self.computing_layout
    }

    fn set_layout_frozen(&mut self, frozen: bool) {
        if self.frozen == frozen {
            return;
        }
        self.frozen = frozen;
        if !frozen && std::mem::take(&mut self.layout_deferred) {
            self.layout_requested = true;
        }
    }

    fn is_layout_frozen(&self) -> bool {
        self.frozen
    }
}
