use std::rc::Rc;

use super::ListAdapter;

pub type SharedAdapter = Rc<dyn ListAdapter>;

/// A scrollable list as seen by a skeleton screen.
pub trait ListHost {
    fn adapter(&self) -> Option<SharedAdapter>;

    /// Installs `adapter` as the active data source. Installing an adapter
    /// always unfreezes the layout and schedules a layout pass.
    fn set_adapter(&mut self, adapter: Option<SharedAdapter>);

    /// Whether a layout pass is running right now.
    fn is_computing_layout(&self) -> bool;

    fn set_layout_frozen(&mut self, frozen: bool);

    fn is_layout_frozen(&self) -> bool;
}

/// Whether two optional adapters are the same instance.
pub fn same_adapter(a: Option<&SharedAdapter>, b: Option<&SharedAdapter>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        (None, None) => true,
        _ => false,
    }
}
