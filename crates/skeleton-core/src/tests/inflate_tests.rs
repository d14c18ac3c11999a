use super::*;
use crate::Group;

#[test]
fn registered_leaf_inflates_detached_with_params() {
    let registry =
        TemplateRegistry::new().register_leaf(TemplateId(7), "card", Some(LayoutParams::row(72.0)));
    let mut tree = ViewTree::new();
    let root = tree.root();

    let view = registry
        .inflate(&mut tree, TemplateId(7), Some(root))
        .expect("inflate");

    assert!(tree.is_view::<Leaf>(view));
    assert_eq!(tree.parent_of(view), None);
    assert_eq!(tree.layout_params(view), Some(LayoutParams::row(72.0)));
}

#[test]
fn unknown_template_is_reported() {
    let registry = TemplateRegistry::new();
    let mut tree = ViewTree::new();
    let before = tree.len();

    let err = registry
        .inflate(&mut tree, TemplateId(3), None)
        .expect_err("nothing registered");

    assert_eq!(err, InflateError::UnknownTemplate(TemplateId(3)));
    assert_eq!(tree.len(), before);
}

#[test]
fn factories_can_build_nested_subtrees() {
    let registry = TemplateRegistry::new().register(TemplateId(1), |tree, _| {
        let group = tree.create(Box::new(Group::new("row")));
        let title = tree.create(Box::new(Leaf::new("title")));
        let subtitle = tree.create(Box::new(Leaf::new("subtitle")));
        tree.add_view(group, title)?;
        tree.add_view(group, subtitle)?;
        Ok(group)
    });
    let mut tree = ViewTree::new();

    let row = registry
        .inflate(&mut tree, TemplateId(1), None)
        .expect("inflate");

    assert_eq!(tree.child_count(row), 2);
    assert!(registry.contains(TemplateId(1)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn tree_errors_surface_through_inflation() {
    let registry = TemplateRegistry::new().register(TemplateId(2), |tree, _| {
        let leaf = tree.create(Box::new(Leaf::new("leaf")));
        let other = tree.create(Box::new(Leaf::new("other")));
        tree.add_view(leaf, other)?;
        Ok(leaf)
    });
    let mut tree = ViewTree::new();

    let err = registry
        .inflate(&mut tree, TemplateId(2), None)
        .expect_err("leaf cannot hold children");

    assert!(matches!(
        err,
        InflateError::Tree(TreeError::NotAContainer { .. })
    ));
    assert!(err.to_string().starts_with("inflation failed"));
}
