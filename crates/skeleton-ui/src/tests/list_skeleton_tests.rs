use super::*;
use skeleton_testing::{test_inflater, FixedAdapter, RecordingListHost, ROW_A, ROW_B};

fn recording_list(real_items: usize) -> (Owned<RecordingListHost>, SharedAdapter) {
    let real: SharedAdapter = FixedAdapter::new(real_items);
    let list = Owned::new(RecordingListHost::with_adapter(real.clone()));
    (list, real)
}

fn installed_is(list: &Owned<RecordingListHost>, adapter: &SharedAdapter) -> bool {
    list.with(|list| same_adapter(list.adapter().as_ref(), Some(adapter)))
}

#[test]
fn show_installs_the_skeleton_and_freezes() {
    let (list, _real) = recording_list(50);
    let screen = ListSkeletonBuilder::new(list.clone(), test_inflater())
        .count(8)
        .load_array([ROW_A, ROW_B])
        .show();

    let skeleton: SharedAdapter = screen.skeleton_adapter();
    assert!(installed_is(&list, &skeleton));
    assert_eq!(list.with(|list| list.item_count()), 8);
    assert!(list.with(|list| list.is_layout_frozen()));
    assert!(screen.is_showing());
}

#[test]
fn hide_reinstalls_the_adapter_found_on_the_list() {
    let (list, real) = recording_list(50);
    let mut screen = ListSkeletonBuilder::new(list.clone(), test_inflater()).show();

    screen.hide();

    assert!(installed_is(&list, &real));
    assert_eq!(list.with(|list| list.item_count()), 50);
    assert!(!list.with(|list| list.is_layout_frozen()));
}

#[test]
fn builder_adapter_wins_over_the_list_adapter() {
    let (list, _initial) = recording_list(3);
    let supplied: SharedAdapter = FixedAdapter::new(20);
    let mut screen = ListSkeletonBuilder::new(list.clone(), test_inflater())
        .adapter(supplied.clone())
        .show();

    screen.hide();
    assert!(installed_is(&list, &supplied));
}

#[test]
fn mid_layout_show_skips_the_freeze() {
    let (list, _real) = recording_list(5);
    list.update(|list| list.set_computing_layout(true));

    let screen = ListSkeletonBuilder::new(list.clone(), test_inflater()).show();

    assert!(screen.is_showing());
    assert!(!list.with(|list| list.is_layout_frozen()));
    assert!(list.with(|list| list.freeze_calls().is_empty()));
}

#[test]
fn freeze_can_be_turned_off() {
    let (list, _real) = recording_list(5);
    ListSkeletonBuilder::new(list.clone(), test_inflater())
        .frozen(false)
        .show();
    assert!(!list.with(|list| list.is_layout_frozen()));
    assert!(list.with(|list| list.freeze_calls().is_empty()));
}

#[test]
fn repeated_show_keeps_the_real_adapter() {
    let (list, real) = recording_list(12);
    let mut screen = ListSkeletonBuilder::new(list.clone(), test_inflater()).show();
    screen.show();
    assert_eq!(list.with(|list| list.adapter_installs()), 2);

    screen.hide();
    assert!(installed_is(&list, &real));
}

#[test]
fn hide_without_show_does_nothing() {
    let (list, real) = recording_list(4);
    let mut screen = ListSkeletonBuilder::new(list.clone(), test_inflater()).build();
    screen.hide();
    assert_eq!(list.with(|list| list.adapter_installs()), 0);
    assert!(installed_is(&list, &real));
}

#[test]
fn list_without_adapter_gets_none_back() {
    let list = Owned::new(RecordingListHost::new());
    let mut screen = ListSkeletonBuilder::new(list.clone(), test_inflater()).show();
    assert!(screen.actual_adapter().is_none());
    screen.hide();
    assert!(list.with(|list| list.adapter().is_none()));
}

#[test]
fn default_count_is_ten() {
    let (list, _real) = recording_list(1);
    let screen = ListSkeletonBuilder::new(list, test_inflater()).build();
    assert_eq!(screen.skeleton_adapter().item_count(), 10);
    assert!(!screen.is_showing());
}
