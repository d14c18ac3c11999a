//! Plain views used as roots, containers and template leaves.

use std::borrow::Cow;

use crate::View;

/// A container with no behavior of its own.
#[derive(Debug, Clone)]
pub struct Group {
    label: Cow<'static, str>,
}

impl Group {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl View for Group {
    fn is_container(&self) -> bool {
        true
    }

    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Group({})", self.label))
    }
}

/// A childless view, typically the block shapes a template is built from.
#[derive(Debug, Clone)]
pub struct Leaf {
    label: Cow<'static, str>,
}

impl Leaf {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl View for Leaf {
    fn describe(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Leaf({})", self.label))
    }
}
