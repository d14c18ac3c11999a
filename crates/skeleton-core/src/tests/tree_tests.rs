use super::*;
use crate::{Leaf, LayoutParams};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct Lifecycle {
    mounts: Cell<usize>,
    unmounts: Cell<usize>,
    frames: RefCell<Vec<u64>>,
}

struct RecordingView {
    lifecycle: Rc<Lifecycle>,
}

impl View for RecordingView {
    fn mount(&mut self) {
        self.lifecycle.mounts.set(self.lifecycle.mounts.get() + 1);
    }

    fn unmount(&mut self) {
        self.lifecycle.unmounts.set(self.lifecycle.unmounts.get() + 1);
    }

    fn on_frame(&mut self, frame_time_nanos: u64) {
        self.lifecycle.frames.borrow_mut().push(frame_time_nanos);
    }
}

fn recording(tree: &mut ViewTree) -> (ViewId, Rc<Lifecycle>) {
    let lifecycle = Rc::new(Lifecycle::default());
    let id = tree.create(Box::new(RecordingView {
        lifecycle: Rc::clone(&lifecycle),
    }));
    (id, lifecycle)
}

fn container_with_leaves(tree: &mut ViewTree, count: usize) -> (ViewId, Vec<ViewId>) {
    let container = tree.create(Box::new(Group::new("content")));
    tree.add_view(tree.root(), container).expect("attach container");
    let leaves = (0..count)
        .map(|i| {
            let leaf = tree.create(Box::new(Leaf::new(format!("leaf-{i}"))));
            tree.add_view(container, leaf).expect("add leaf");
            leaf
        })
        .collect();
    (container, leaves)
}

#[test]
fn new_tree_has_attached_root() {
    let tree = ViewTree::new();
    assert_eq!(tree.len(), 1);
    assert!(tree.is_attached(tree.root()));
    assert_eq!(tree.parent_of(tree.root()), None);
}

#[test]
fn add_view_at_inserts_at_index_and_sets_parent() {
    let mut tree = ViewTree::new();
    let (container, leaves) = container_with_leaves(&mut tree, 3);
    let extra = tree.create(Box::new(Leaf::new("extra")));

    tree.add_view_at(container, extra, 1).expect("insert");

    assert_eq!(
        tree.children(container),
        &[leaves[0], extra, leaves[1], leaves[2]]
    );
    assert_eq!(tree.parent_of(extra), Some(container));
    assert_eq!(tree.index_of(container, extra), Some(1));
    assert_eq!(tree.child_at(container, 3), Some(leaves[2]));
}

#[test]
fn attach_and_detach_drive_mount_hooks_through_subtree() {
    let mut tree = ViewTree::new();
    let group = tree.create(Box::new(Group::new("detached")));
    let (child, lifecycle) = recording(&mut tree);
    tree.add_view(group, child).expect("add child");
    assert_eq!(lifecycle.mounts.get(), 0, "detached subtree must not mount");

    tree.add_view(tree.root(), group).expect("attach");
    assert_eq!(lifecycle.mounts.get(), 1);
    assert!(tree.is_attached(child));

    tree.remove_view(tree.root(), group).expect("detach");
    assert_eq!(lifecycle.unmounts.get(), 1);
    assert!(!tree.is_attached(child));
    assert_eq!(tree.parent_of(group), None);
    assert_eq!(tree.parent_of(child), Some(group));
}

#[test]
fn frames_reach_only_attached_views() {
    let mut tree = ViewTree::new();
    let (attached, attached_log) = recording(&mut tree);
    let (detached, detached_log) = recording(&mut tree);
    tree.add_view(tree.root(), attached).expect("attach");

    tree.frame(16);
    tree.frame(32);

    assert_eq!(*attached_log.frames.borrow(), vec![16, 32]);
    assert!(detached_log.frames.borrow().is_empty());
    assert!(!tree.is_attached(detached));
}

#[test]
fn invalid_insertions_are_rejected() {
    let mut tree = ViewTree::new();
    let (container, leaves) = container_with_leaves(&mut tree, 2);
    let loose = tree.create(Box::new(Leaf::new("loose")));

    assert_eq!(
        tree.add_view_at(container, loose, 5),
        Err(TreeError::IndexOutOfBounds { index: 5, len: 2 })
    );
    assert_eq!(
        tree.add_view(container, leaves[0]),
        Err(TreeError::AlreadyHasParent {
            id: leaves[0],
            parent: container
        })
    );
    assert_eq!(
        tree.add_view(leaves[1], loose),
        Err(TreeError::NotAContainer { id: leaves[1] })
    );
    assert_eq!(
        tree.add_view(container, tree.root()),
        Err(TreeError::WouldCycle {
            id: tree.root(),
            container
        })
    );
    assert_eq!(
        tree.remove_view(container, loose),
        Err(TreeError::NotAChild {
            id: loose,
            container
        })
    );
}

#[test]
fn remove_frees_subtree_and_unmounts() {
    let mut tree = ViewTree::new();
    let group = tree.create(Box::new(Group::new("group")));
    let (child, lifecycle) = recording(&mut tree);
    tree.add_view(group, child).expect("add child");
    tree.add_view(tree.root(), group).expect("attach");
    let before = tree.len();

    tree.remove(group).expect("remove");

    assert_eq!(tree.len(), before - 2);
    assert!(!tree.contains(child));
    assert!(tree.children(tree.root()).is_empty());
    assert_eq!(lifecycle.unmounts.get(), 1);
    assert_eq!(tree.remove(tree.root()), Err(TreeError::RootRemoval));
    assert_eq!(tree.remove(group), Err(TreeError::Missing { id: group }));
}

#[test]
fn layout_params_and_typed_access() {
    let mut tree = ViewTree::new();
    let leaf = tree.create_with_params(Box::new(Leaf::new("row")), LayoutParams::row(48.0));

    assert_eq!(tree.layout_params(leaf), Some(LayoutParams::row(48.0)));
    tree.set_layout_params(leaf, None).expect("clear params");
    assert_eq!(tree.layout_params(leaf), None);

    assert!(tree.is_view::<Leaf>(leaf));
    assert!(!tree.is_view::<Group>(leaf));
    let label = tree
        .with_view(leaf, |view: &mut Leaf| view.label().to_string())
        .expect("leaf access");
    assert_eq!(label, "row");
    assert!(matches!(
        tree.with_view(leaf, |_: &mut Group| ()),
        Err(TreeError::TypeMismatch { id, .. }) if id == leaf
    ));
}

#[test]
fn dump_tree_lists_nested_views() {
    let mut tree = ViewTree::new();
    let (_, _) = container_with_leaves(&mut tree, 1);
    let dump = tree.dump_tree();
    assert!(dump.contains("Group(window)"));
    assert!(dump.contains("  [1] Group(content)"));
    assert!(dump.contains("    [2] Leaf(leaf-0)"));
}
