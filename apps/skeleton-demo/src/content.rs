//! Templates and the "real" data source of the demo.

use std::rc::Rc;

use skeleton_core::{
    Group, InflateError, LayoutParams, Leaf, TemplateId, TemplateRegistry, TreeError, ViewId,
    ViewTree,
};
use skeleton_foundation::{ListAdapter, ViewType};

pub const PROFILE_CARD: TemplateId = TemplateId(10);
pub const ARTICLE_ROW: TemplateId = TemplateId(11);
pub const ARTICLE_ROW_WITH_IMAGE: TemplateId = TemplateId(12);

/// Builds a group of labelled block leaves, the usual shape of a placeholder.
fn blocks(
    tree: &mut ViewTree,
    label: &'static str,
    params: LayoutParams,
    parts: &[&'static str],
) -> Result<ViewId, TreeError> {
    let group = tree.create_with_params(Box::new(Group::new(label)), params);
    for &part in parts {
        let block = tree.create(Box::new(Leaf::new(part)));
        tree.add_view(group, block)?;
    }
    Ok(group)
}

pub fn templates() -> Rc<TemplateRegistry> {
    Rc::new(
        TemplateRegistry::new()
            .register(PROFILE_CARD, |tree, _parent| {
                blocks(
                    tree,
                    "profile-card",
                    LayoutParams::fixed(360.0, 120.0),
                    &["avatar", "name-bar", "bio-bar"],
                )
            })
            .register(ARTICLE_ROW, |tree, _parent| {
                blocks(
                    tree,
                    "article-row",
                    LayoutParams::row(72.0),
                    &["title-bar", "summary-bar"],
                )
            })
            .register(ARTICLE_ROW_WITH_IMAGE, |tree, _parent| {
                blocks(
                    tree,
                    "article-row-image",
                    LayoutParams::row(96.0),
                    &["thumbnail", "title-bar", "summary-bar"],
                )
            }),
    )
}

/// Loaded articles, one leaf per row.
pub struct ArticleAdapter {
    titles: Vec<String>,
}

impl ArticleAdapter {
    pub fn new(count: usize) -> Self {
        Self {
            titles: (1..=count).map(|i| format!("Article #{i}")).collect(),
        }
    }
}

impl ListAdapter for ArticleAdapter {
    fn item_count(&self) -> usize {
        self.titles.len()
    }

    fn create_row(
        &self,
        tree: &mut ViewTree,
        _parent: ViewId,
        _view_type: ViewType,
    ) -> Result<ViewId, InflateError> {
        Ok(tree.create_with_params(Box::new(Leaf::new("article")), LayoutParams::row(72.0)))
    }

    fn bind_row(&self, _tree: &mut ViewTree, row: ViewId, position: usize) {
        log::trace!("bound {} to row {row}", self.titles[position]);
    }
}
