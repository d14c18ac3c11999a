use std::rc::Rc;

use skeleton_core::{Group, Leaf, LayoutParams, Owned, TemplateId, TemplateRegistry, ViewId, ViewTree};

pub const ROW_A: TemplateId = TemplateId(1);
pub const ROW_B: TemplateId = TemplateId(2);
/// Registered without layout params.
pub const ROW_BARE: TemplateId = TemplateId(3);
pub const UNREGISTERED: TemplateId = TemplateId(99);

pub const CONTENT_PARAMS: LayoutParams = LayoutParams::fixed(320.0, 40.0);

/// Registry with [`TemplateId::DEFAULT_ROW`], [`ROW_A`], [`ROW_B`] and
/// [`ROW_BARE`], each inflating to a labelled [`Leaf`].
pub fn test_inflater() -> Rc<TemplateRegistry> {
    Rc::new(
        TemplateRegistry::new()
            .register_leaf(
                TemplateId::DEFAULT_ROW,
                "default-row",
                Some(LayoutParams::row(56.0)),
            )
            .register_leaf(ROW_A, "row-a", Some(LayoutParams::row(48.0)))
            .register_leaf(ROW_B, "row-b", Some(LayoutParams::row(96.0)))
            .register_leaf(ROW_BARE, "row-bare", None),
    )
}

/// Label of a [`Leaf`], `None` for any other view.
pub fn leaf_label(tree: &mut ViewTree, id: ViewId) -> Option<String> {
    tree.with_view(id, |leaf: &mut Leaf| leaf.label().to_string())
        .ok()
}

/// An attached container holding `count` content leaves.
pub struct SlotFixture {
    pub tree: Owned<ViewTree>,
    pub container: ViewId,
    pub children: Vec<ViewId>,
}

impl SlotFixture {
    pub fn new(count: usize) -> Self {
        let tree = Owned::new(ViewTree::new());
        let (container, children) = tree.update(|tree| {
            let container = tree.create(Box::new(Group::new("content")));
            let root = tree.root();
            tree.add_view(root, container)
                .expect("container attaches to root");
            let children = (0..count)
                .map(|i| {
                    let child = tree.create_with_params(
                        Box::new(Leaf::new(format!("content-{i}"))),
                        CONTENT_PARAMS,
                    );
                    tree.add_view(container, child).expect("child attaches");
                    child
                })
                .collect();
            (container, children)
        });
        Self {
            tree,
            container,
            children,
        }
    }

    pub fn child(&self, index: usize) -> ViewId {
        self.children[index]
    }

    /// Current children of the container.
    pub fn snapshot(&self) -> Vec<ViewId> {
        self.tree.with(|tree| tree.children(self.container).to_vec())
    }

    /// A leaf that belongs to no container.
    pub fn detached_leaf(&self, label: &'static str) -> ViewId {
        self.tree
            .update(|tree| tree.create(Box::new(Leaf::new(label))))
    }

    pub fn len(&self) -> usize {
        self.tree.with(|tree| tree.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
