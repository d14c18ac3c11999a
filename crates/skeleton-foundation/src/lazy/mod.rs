//! Virtualized list contracts.
//!
//! - [`ListAdapter`] - data source that creates and binds rows
//! - [`ListHost`] - a scrollable list whose adapter can be swapped and whose
//!   layout can be frozen
//! - [`RecyclerList`] - a [`ListHost`] that materializes the visible rows into
//!   a [`ViewTree`](skeleton_core::ViewTree) container and recycles them per
//!   [`ViewType`]

mod adapter;
mod list_host;
mod recycler_list;

pub use adapter::*;
pub use list_host::*;
pub use recycler_list::*;
