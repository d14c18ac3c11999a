mod content;

use std::rc::Rc;

use anyhow::Context;
use skeleton_animation::{Direction, Shape};
use skeleton_core::{Group, LayoutParams, Leaf, Owned, ViewTree};
use skeleton_foundation::{ListHost, RecyclerList, SharedAdapter};
use skeleton_graphics::{Color, ColorRef, Palette};
use skeleton_ui::{Skeleton, SkeletonScreen};

const FRAME_NANOS: u64 = 16_666_667;

/// Advances the host clock by `frames` frames.
fn tick(tree: &Owned<ViewTree>, clock: &mut u64, frames: u32) {
    tree.update(|tree| {
        for _ in 0..frames {
            *clock += FRAME_NANOS;
            tree.frame(*clock);
        }
    });
}

fn single_view_demo(clock: &mut u64) -> anyhow::Result<()> {
    let tree = Owned::new(ViewTree::new());
    let profile = tree.update(|tree| -> anyhow::Result<_> {
        let screen = tree.create(Box::new(Group::new("profile-screen")));
        tree.add_view(tree.root(), screen)?;
        for label in ["toolbar", "profile", "actions"] {
            let view = tree.create_with_params(
                Box::new(Leaf::new(label)),
                LayoutParams::match_parent(),
            );
            tree.add_view(screen, view)?;
        }
        tree.child_at(screen, 1).context("profile view missing")
    })?;

    let palette = Rc::new(Palette::new().with_named("brand", Color::from_rgb_u8(0x5C, 0x6B, 0xC0)));
    let mut placeholder = Skeleton::bind(tree.clone(), profile, content::templates())
        .load(content::PROFILE_CARD)
        .color(ColorRef::named("brand"))
        .shape(Shape::Radial)
        .duration(1200)
        .color_resolver(palette)
        .show();

    log::info!("profile is loading:\n{}", tree.with(|tree| tree.dump_tree()));
    tick(&tree, clock, 30);

    placeholder.hide();
    log::info!("profile loaded:\n{}", tree.with(|tree| tree.dump_tree()));
    Ok(())
}

fn list_demo(clock: &mut u64) -> anyhow::Result<()> {
    let tree = Owned::new(ViewTree::new());
    let container = tree.update(|tree| -> anyhow::Result<_> {
        let container = tree.create(Box::new(Group::new("articles")));
        tree.add_view(tree.root(), container)?;
        Ok(container)
    })?;
    let list = Owned::new(RecyclerList::new(tree.clone(), container, 6));
    let articles: SharedAdapter = Rc::new(content::ArticleAdapter::new(50));

    let mut placeholder = Skeleton::bind_list(list.clone(), content::templates())
        .adapter(articles)
        .load_array([content::ARTICLE_ROW, content::ARTICLE_ROW_WITH_IMAGE])
        .count(8)
        .direction(Direction::TopToBottom)
        .colored(false)
        .show();

    list.update(|list| list.layout());
    log::info!(
        "articles are loading ({} placeholder rows, frozen: {}):\n{}",
        list.with(|list| list.rows().len()),
        list.with(|list| list.is_layout_frozen()),
        tree.with(|tree| tree.dump_tree())
    );
    tick(&tree, clock, 30);

    placeholder.hide();
    list.update(|list| list.layout());
    log::info!(
        "articles loaded ({} items, {} rows):\n{}",
        list.with(|list| list.item_count()),
        list.with(|list| list.rows().len()),
        tree.with(|tree| tree.dump_tree())
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut clock = 0;
    single_view_demo(&mut clock)?;
    list_demo(&mut clock)?;
    Ok(())
}
