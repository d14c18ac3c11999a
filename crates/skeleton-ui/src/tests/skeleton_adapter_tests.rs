use super::*;
use crate::ShimmerOptions;
use skeleton_animation::ShimmerBuilder;
use skeleton_core::{Group, Leaf, LayoutParams};
use skeleton_testing::{leaf_label, test_inflater, ROW_A, ROW_B, ROW_BARE, UNREGISTERED};

fn adapter(config: PlaceholderConfig) -> SkeletonAdapter {
    SkeletonAdapter::new(test_inflater(), &config, Shimmer::default())
}

fn multi(templates: Vec<TemplateId>, item_count: usize) -> SkeletonAdapter {
    adapter(PlaceholderConfig {
        templates,
        item_count,
        ..PlaceholderConfig::default()
    })
}

fn list_container(tree: &mut ViewTree) -> ViewId {
    let container = tree.create(Box::new(Group::new("list")));
    tree.add_view(tree.root(), container).expect("attach list");
    container
}

#[test]
fn reports_the_configured_count() {
    for count in [0, 1, 7, 1000] {
        let adapter = adapter(PlaceholderConfig {
            item_count: count,
            ..PlaceholderConfig::default()
        });
        assert_eq!(adapter.item_count(), count);
    }
}

#[test]
fn item_id_is_the_position() {
    let adapter = adapter(PlaceholderConfig::default());
    assert_eq!(adapter.item_id(0), 0);
    assert_eq!(adapter.item_id(9), 9);
}

#[test]
fn single_template_has_one_view_type() {
    let adapter = adapter(PlaceholderConfig {
        template: ROW_A,
        ..PlaceholderConfig::default()
    });
    assert_eq!(adapter.view_type_count(), 1);
    assert!((0..10).all(|position| adapter.item_view_type(position) == ViewType(0)));
    assert!((0..10).all(|position| adapter.template_for(position) == ROW_A));
}

#[test]
fn view_types_follow_first_seen_template_order() {
    let adapter = multi(vec![ROW_B, ROW_A, ROW_B], 6);
    assert_eq!(adapter.view_type_count(), 2);
    assert_eq!(adapter.view_type_of(ROW_B), Some(ViewType(0)));
    assert_eq!(adapter.view_type_of(ROW_A), Some(ViewType(1)));
    assert_eq!(adapter.template_of(ViewType(1)), Some(ROW_A));
    assert_eq!(adapter.template_of(ViewType(5)), None);

    let types: Vec<_> = (0..6).map(|p| adapter.item_view_type(p)).collect();
    assert_eq!(
        types,
        vec![
            ViewType(0),
            ViewType(1),
            ViewType(0),
            ViewType(0),
            ViewType(1),
            ViewType(0)
        ]
    );
}

#[test]
fn shimmer_rows_wrap_the_template_in_a_frame() {
    let adapter = multi(vec![ROW_A, ROW_B], 4);
    let mut tree = ViewTree::new();
    let parent = list_container(&mut tree);

    let row = adapter
        .create_row(&mut tree, parent, ViewType(1))
        .expect("row");
    assert!(tree.is_view::<ShimmerFrame>(row));
    assert_eq!(tree.parent_of(row), None, "rows are created detached");
    let inner = tree.children(row)[0];
    assert_eq!(leaf_label(&mut tree, inner).as_deref(), Some("row-b"));
    assert_eq!(tree.layout_params(row), Some(LayoutParams::row(96.0)));
}

#[test]
fn plain_rows_are_the_inflated_template() {
    let adapter = adapter(PlaceholderConfig {
        template: ROW_BARE,
        shimmer: ShimmerOptions {
            enabled: false,
            ..ShimmerOptions::default()
        },
        ..PlaceholderConfig::default()
    });
    assert_eq!(adapter.shimmer(), None);
    let mut tree = ViewTree::new();
    let parent = list_container(&mut tree);

    let row = adapter
        .create_row(&mut tree, parent, ViewType::DEFAULT)
        .expect("row");
    assert!(tree.is_view::<Leaf>(row));
    assert_eq!(leaf_label(&mut tree, row).as_deref(), Some("row-bare"));

    // Binding an undecorated row leaves it alone.
    adapter.bind_row(&mut tree, row, 0);
}

#[test]
fn unknown_view_type_falls_back_to_the_primary_template() {
    let adapter = multi(vec![ROW_A, ROW_B], 2);
    let mut tree = ViewTree::new();
    let parent = list_container(&mut tree);

    let row = adapter
        .create_row(&mut tree, parent, ViewType(42))
        .expect("row");
    let inner = tree.children(row)[0];
    assert_eq!(leaf_label(&mut tree, inner).as_deref(), Some("row-a"));
}

#[test]
fn failed_inflation_leaves_nothing_behind() {
    let adapter = adapter(PlaceholderConfig {
        template: UNREGISTERED,
        ..PlaceholderConfig::default()
    });
    let mut tree = ViewTree::new();
    let parent = list_container(&mut tree);
    let before = tree.len();

    let err = adapter
        .create_row(&mut tree, parent, ViewType::DEFAULT)
        .expect_err("template is not registered");
    assert!(matches!(err, InflateError::UnknownTemplate(t) if t == UNREGISTERED));
    assert_eq!(tree.len(), before);
}

#[test]
fn binding_starts_an_independent_animation_per_row() {
    let shimmer = ShimmerBuilder::colored().auto_start(false).build();
    let adapter = SkeletonAdapter::new(test_inflater(), &PlaceholderConfig::default(), shimmer);
    let mut tree = ViewTree::new();
    let parent = list_container(&mut tree);

    let first = adapter
        .create_row(&mut tree, parent, ViewType::DEFAULT)
        .expect("first row");
    let second = adapter
        .create_row(&mut tree, parent, ViewType::DEFAULT)
        .expect("second row");
    let animation = |tree: &mut ViewTree, row| {
        tree.with_view(row, |frame: &mut ShimmerFrame| frame.animation())
            .expect("frame")
    };
    let first_animation = animation(&mut tree, first);
    let second_animation = animation(&mut tree, second);
    assert!(!first_animation.ptr_eq(&second_animation));
    assert!(!first_animation.is_running());

    adapter.bind_row(&mut tree, first, 0);
    assert!(first_animation.is_running());
    assert!(!second_animation.is_running());
    assert_eq!(first_animation.config(), shimmer);
}

#[test]
fn binding_a_foreign_row_is_ignored() {
    let adapter = adapter(PlaceholderConfig::default());
    let mut tree = ViewTree::new();
    let stranger = tree.create(Box::new(Leaf::new("stranger")));
    adapter.bind_row(&mut tree, stranger, 3);
    assert!(tree.is_view::<Leaf>(stranger));
}
