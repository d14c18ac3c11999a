use smallvec::{smallvec, SmallVec};

use crate::{ContainerHost, Group, LayoutParams, TreeError, View, ViewId};

struct ViewSlot {
    view: Box<dyn View>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    layout_params: Option<LayoutParams>,
    attached: bool,
}

/// Arena backed view hierarchy with a permanently attached root.
///
/// Views created with [`ViewTree::create`] start detached. Adding a view under
/// an attached container mounts its whole subtree; removing it unmounts the
/// subtree again. Ids are never reused after [`ViewTree::remove`].
pub struct ViewTree {
    slots: Vec<Option<ViewSlot>>,
    root: ViewId,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    pub fn new() -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            root: 0,
        };
        let root = tree.create(Box::new(Group::new("window")));
        tree.root = root;
        tree.set_attached(root, true);
        tree
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    pub fn create(&mut self, view: Box<dyn View>) -> ViewId {
        let id = self.slots.len();
        self.slots.push(Some(ViewSlot {
            view,
            parent: None,
            children: Vec::new(),
            layout_params: None,
            attached: false,
        }));
        id
    }

    pub fn create_with_params(&mut self, view: Box<dyn View>, params: LayoutParams) -> ViewId {
        let id = self.create(view);
        if let Some(Some(slot)) = self.slots.get_mut(id) {
            slot.layout_params = Some(params);
        }
        id
    }

    fn slot(&self, id: ViewId) -> Result<&ViewSlot, TreeError> {
        self.slots
            .get(id)
            .and_then(Option::as_ref)
            .ok_or(TreeError::Missing { id })
    }

    fn slot_mut(&mut self, id: ViewId) -> Result<&mut ViewSlot, TreeError> {
        self.slots
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(TreeError::Missing { id })
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.slot(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.slot(id)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn child_count(&self, id: ViewId) -> usize {
        self.children(id).len()
    }

    pub fn is_attached(&self, id: ViewId) -> bool {
        self.slot(id).map(|slot| slot.attached).unwrap_or(false)
    }

    pub fn parent_of(&self, id: ViewId) -> Option<ViewId> {
        self.slot(id).ok().and_then(|slot| slot.parent)
    }

    pub fn index_of(&self, container: ViewId, view: ViewId) -> Option<usize> {
        self.children(container).iter().position(|&child| child == view)
    }

    pub fn child_at(&self, container: ViewId, index: usize) -> Option<ViewId> {
        self.children(container).get(index).copied()
    }

    /// Appends `view` as the last child of `container`.
    pub fn add_view(&mut self, container: ViewId, view: ViewId) -> Result<(), TreeError> {
        let len = self.slot(container)?.children.len();
        self.add_view_at(container, view, len)
    }

    pub fn add_view_at(
        &mut self,
        container: ViewId,
        view: ViewId,
        index: usize,
    ) -> Result<(), TreeError> {
        let container_slot = self.slot(container)?;
        if !container_slot.view.is_container() {
            return Err(TreeError::NotAContainer { id: container });
        }
        let len = container_slot.children.len();
        let attached = container_slot.attached;
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        if let Some(parent) = self.slot(view)?.parent {
            return Err(TreeError::AlreadyHasParent { id: view, parent });
        }
        if self.is_ancestor_or_self(view, container) {
            return Err(TreeError::WouldCycle { id: view, container });
        }

        self.slot_mut(container)?.children.insert(index, view);
        self.slot_mut(view)?.parent = Some(container);
        if attached {
            self.set_attached(view, true);
        }
        Ok(())
    }

    pub fn remove_view(&mut self, container: ViewId, view: ViewId) -> Result<(), TreeError> {
        let position = self
            .slot(container)?
            .children
            .iter()
            .position(|&child| child == view)
            .ok_or(TreeError::NotAChild { id: view, container })?;
        self.slot_mut(container)?.children.remove(position);

        let was_attached = {
            let slot = self.slot_mut(view)?;
            slot.parent = None;
            slot.attached
        };
        if was_attached {
            self.set_attached(view, false);
        }
        Ok(())
    }

    /// Detaches `id` if needed and frees it together with its descendants.
    pub fn remove(&mut self, id: ViewId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::RootRemoval);
        }
        if let Some(parent) = self.slot(id)?.parent {
            self.remove_view(parent, id)?;
        }

        let mut stack: SmallVec<[ViewId; 8]> = smallvec![id];
        while let Some(current) = stack.pop() {
            if let Some(slot) = self.slots.get_mut(current).and_then(Option::take) {
                stack.extend(slot.children);
            }
        }
        Ok(())
    }

    pub fn layout_params(&self, id: ViewId) -> Option<LayoutParams> {
        self.slot(id).ok().and_then(|slot| slot.layout_params)
    }

    pub fn set_layout_params(
        &mut self,
        id: ViewId,
        params: Option<LayoutParams>,
    ) -> Result<(), TreeError> {
        self.slot_mut(id)?.layout_params = params;
        Ok(())
    }

    pub fn with_view<V: View, R>(
        &mut self,
        id: ViewId,
        f: impl FnOnce(&mut V) -> R,
    ) -> Result<R, TreeError> {
        let slot = self.slot_mut(id)?;
        let typed = slot
            .view
            .as_any_mut()
            .downcast_mut::<V>()
            .ok_or(TreeError::TypeMismatch {
                id,
                expected: std::any::type_name::<V>(),
            })?;
        Ok(f(typed))
    }

    pub fn is_view<V: View>(&self, id: ViewId) -> bool {
        self.slot(id)
            .map(|slot| slot.view.as_any().is::<V>())
            .unwrap_or(false)
    }

    /// Delivers a host frame to every attached view, parents first.
    pub fn frame(&mut self, frame_time_nanos: u64) {
        let mut stack: SmallVec<[ViewId; 8]> = smallvec![self.root];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slots.get_mut(current).and_then(Option::as_mut) else {
                continue;
            };
            slot.view.on_frame(frame_time_nanos);
            stack.extend(slot.children.iter().rev().copied());
        }
    }

    pub fn dump_tree(&self) -> String {
        let mut output = String::new();
        self.dump_node(&mut output, self.root, 0);
        output
    }

    fn dump_node(&self, output: &mut String, id: ViewId, depth: usize) {
        let indent = "  ".repeat(depth);
        match self.slot(id) {
            Ok(slot) => {
                output.push_str(&format!("{indent}[{id}] {}\n", slot.view.describe()));
                for &child in &slot.children {
                    self.dump_node(output, child, depth + 1);
                }
            }
            Err(_) => output.push_str(&format!("{indent}[{id}] (missing)\n")),
        }
    }

    fn is_ancestor_or_self(&self, candidate: ViewId, id: ViewId) -> bool {
        let mut current = Some(id);
        while let Some(view) = current {
            if view == candidate {
                return true;
            }
            current = self.parent_of(view);
        }
        false
    }

    fn set_attached(&mut self, id: ViewId, attached: bool) {
        let mut stack: SmallVec<[ViewId; 8]> = smallvec![id];
        while let Some(current) = stack.pop() {
            let Some(slot) = self.slots.get_mut(current).and_then(Option::as_mut) else {
                continue;
            };
            if slot.attached != attached {
                slot.attached = attached;
                if attached {
                    slot.view.mount();
                } else {
                    slot.view.unmount();
                }
            }
            stack.extend(slot.children.iter().rev().copied());
        }
    }
}

impl ContainerHost for ViewTree {
    fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        ViewTree::parent_of(self, view)
    }

    fn index_of(&self, container: ViewId, view: ViewId) -> Option<usize> {
        ViewTree::index_of(self, container, view)
    }

    fn child_at(&self, container: ViewId, index: usize) -> Option<ViewId> {
        ViewTree::child_at(self, container, index)
    }

    fn add_view_at(
        &mut self,
        container: ViewId,
        view: ViewId,
        index: usize,
    ) -> Result<(), TreeError> {
        ViewTree::add_view_at(self, container, view, index)
    }

    fn remove_view(&mut self, container: ViewId, view: ViewId) -> Result<(), TreeError> {
        ViewTree::remove_view(self, container, view)
    }

    fn layout_params(&self, view: ViewId) -> Option<LayoutParams> {
        ViewTree::layout_params(self, view)
    }

    fn set_layout_params(
        &mut self,
        view: ViewId,
        params: Option<LayoutParams>,
    ) -> Result<(), TreeError> {
        ViewTree::set_layout_params(self, view, params)
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
