#![doc = r"Retained view tree and collaborator seams for skeleton screens."]

pub mod host;
pub mod inflate;
pub mod layout;
pub mod owned;
mod tree;
pub mod views;

pub use host::ContainerHost;
pub use inflate::{InflateError, Inflater, TemplateId, TemplateRegistry};
pub use layout::{Dimension, LayoutParams};
pub use owned::Owned;
pub use tree::ViewTree;
pub use views::{Group, Leaf};

use std::any::Any;
use std::borrow::Cow;

pub type ViewId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    Missing { id: ViewId },
    TypeMismatch { id: ViewId, expected: &'static str },
    NotAContainer { id: ViewId },
    AlreadyHasParent { id: ViewId, parent: ViewId },
    NotAChild { id: ViewId, container: ViewId },
    IndexOutOfBounds { index: usize, len: usize },
    WouldCycle { id: ViewId, container: ViewId },
    RootRemoval,
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::Missing { id } => write!(f, "view {id} missing"),
            TreeError::TypeMismatch { id, expected } => {
                write!(f, "view {id} type mismatch; expected {expected}")
            }
            TreeError::NotAContainer { id } => write!(f, "view {id} cannot hold children"),
            TreeError::AlreadyHasParent { id, parent } => {
                write!(f, "view {id} already belongs to container {parent}")
            }
            TreeError::NotAChild { id, container } => {
                write!(f, "view {id} is not a child of container {container}")
            }
            TreeError::IndexOutOfBounds { index, len } => {
                write!(f, "child index {index} out of bounds for {len} children")
            }
            TreeError::WouldCycle { id, container } => {
                write!(f, "adding view {id} to container {container} would create a cycle")
            }
            TreeError::RootRemoval => write!(f, "the root view cannot be removed"),
        }
    }
}

impl std::error::Error for TreeError {}

/// A node of the retained view tree.
///
/// The tree owns every view and tracks parents, children, layout params and
/// attach state itself; views only react to lifecycle transitions.
pub trait View: Any {
    /// Called when the view becomes part of the attached (visible) tree.
    fn mount(&mut self) {}
    /// Called when the view leaves the attached tree.
    fn unmount(&mut self) {}
    /// Called once per host frame while the view is attached.
    fn on_frame(&mut self, _frame_time_nanos: u64) {}
    /// Whether the tree accepts children for this view.
    fn is_container(&self) -> bool {
        false
    }
    /// Short label used by [`ViewTree::dump_tree`].
    fn describe(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl dyn View {
    pub fn as_any(&self) -> &dyn Any {
        self
    }

    pub fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
