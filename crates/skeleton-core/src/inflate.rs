//! Template inflation seam.
//!
//! Placeholder rows are described by opaque [`TemplateId`]s. Turning an id
//! into a view subtree is the job of an [`Inflater`] supplied by the host;
//! [`TemplateRegistry`] is a closure table implementation of it.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

use crate::{Leaf, LayoutParams, TreeError, ViewId, ViewTree};

/// Identifier of a reusable placeholder layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Template used when a builder is never given one.
    pub const DEFAULT_ROW: TemplateId = TemplateId(0);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflateError {
    UnknownTemplate(TemplateId),
    Tree(TreeError),
}

impl std::fmt::Display for InflateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InflateError::UnknownTemplate(template) => {
                write!(f, "no template registered for {template:?}")
            }
            InflateError::Tree(err) => write!(f, "inflation failed: {err}"),
        }
    }
}

impl std::error::Error for InflateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InflateError::Tree(err) => Some(err),
            InflateError::UnknownTemplate(_) => None,
        }
    }
}

impl From<TreeError> for InflateError {
    fn from(err: TreeError) -> Self {
        InflateError::Tree(err)
    }
}

/// Builds a detached view subtree for a template.
///
/// `parent` is the container the result is destined for; implementations may
/// use it to pick layout params but must not attach the result to it.
pub trait Inflater {
    fn inflate(
        &self,
        tree: &mut ViewTree,
        template: TemplateId,
        parent: Option<ViewId>,
    ) -> Result<ViewId, InflateError>;
}

type TemplateFactory = Box<dyn Fn(&mut ViewTree, Option<ViewId>) -> Result<ViewId, TreeError>>;

#[derive(Default)]
pub struct TemplateRegistry {
    factories: FxHashMap<TemplateId, TemplateFactory>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        mut self,
        template: TemplateId,
        factory: impl Fn(&mut ViewTree, Option<ViewId>) -> Result<ViewId, TreeError> + 'static,
    ) -> Self {
        self.insert(template, factory);
        self
    }

    pub fn insert(
        &mut self,
        template: TemplateId,
        factory: impl Fn(&mut ViewTree, Option<ViewId>) -> Result<ViewId, TreeError> + 'static,
    ) {
        if self.factories.insert(template, Box::new(factory)).is_some() {
            log::debug!("TemplateRegistry: replaced factory for {template:?}");
        }
    }

    /// Registers a template that inflates to a single [`Leaf`].
    pub fn register_leaf(
        self,
        template: TemplateId,
        label: impl Into<Cow<'static, str>>,
        params: Option<LayoutParams>,
    ) -> Self {
        let label = label.into();
        self.register(template, move |tree, _parent| {
            let leaf = Box::new(Leaf::new(label.clone()));
            Ok(match params {
                Some(params) => tree.create_with_params(leaf, params),
                None => tree.create(leaf),
            })
        })
    }

    pub fn contains(&self, template: TemplateId) -> bool {
        self.factories.contains_key(&template)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Inflater for TemplateRegistry {
    fn inflate(
        &self,
        tree: &mut ViewTree,
        template: TemplateId,
        parent: Option<ViewId>,
    ) -> Result<ViewId, InflateError> {
        let factory = self
            .factories
            .get(&template)
            .ok_or(InflateError::UnknownTemplate(template))?;
        let view = factory(tree, parent)?;
        log::trace!("inflated {template:?} into view {view}");
        Ok(view)
    }
}

#[cfg(test)]
#[path = "tests/inflate_tests.rs"]
mod tests;
