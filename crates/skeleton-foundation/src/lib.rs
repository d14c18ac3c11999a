//! Building blocks shared by both placement strategies: the shimmer
//! decorated container and the list contracts a placeholder adapter plugs
//! into.

pub mod lazy;
mod shimmer_frame;

pub use lazy::{ListAdapter, ListHost, RecyclerList, SharedAdapter, ViewType};
pub use shimmer_frame::ShimmerFrame;
