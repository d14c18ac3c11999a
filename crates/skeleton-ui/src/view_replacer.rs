use skeleton_core::{ContainerHost, TreeError, ViewId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    container: ViewId,
    index: usize,
}

/// Swaps the occupant of one container slot and puts the original back.
///
/// The slot is the container and index the source view had when it was
/// captured. Both stay fixed until the source view is restored, so the host
/// must not reorder that container while a replacement is in place.
#[derive(Debug)]
pub struct ViewReplacer {
    source: ViewId,
    target: ViewId,
    slot: Option<Slot>,
}

impl ViewReplacer {
    pub fn new(source: ViewId) -> Self {
        Self {
            source,
            target: source,
            slot: None,
        }
    }

    pub fn source_view(&self) -> ViewId {
        self.source
    }

    /// The view currently occupying the slot.
    pub fn target_view(&self) -> ViewId {
        self.target
    }

    pub fn is_replaced(&self) -> bool {
        self.target != self.source
    }

    /// Container and index recorded for the source view.
    pub fn slot(&self) -> Option<(ViewId, usize)> {
        self.slot.map(|slot| (slot.container, slot.index))
    }

    /// Records where the source view lives. Returns whether a slot is known.
    pub fn capture<H: ContainerHost + ?Sized>(&mut self, host: &H) -> bool {
        if self.slot.is_some() {
            return true;
        }
        let Some(container) = host.parent_of(self.source) else {
            log::error!(
                "ViewReplacer: source view {} is not attached to any container",
                self.source
            );
            return false;
        };
        let Some(index) = host.index_of(container, self.source) else {
            log::error!(
                "ViewReplacer: view {} not found among the children of {container}",
                self.source
            );
            return false;
        };
        self.slot = Some(Slot { container, index });
        true
    }

    /// Puts `view` into the slot in place of the current occupant.
    ///
    /// Returns the displaced occupant, or `None` when nothing was swapped:
    /// the slot cannot be captured, `view` already occupies it, or the
    /// occupant has left the slot behind our back.
    pub fn replace<H: ContainerHost + ?Sized>(
        &mut self,
        host: &mut H,
        view: ViewId,
    ) -> Option<ViewId> {
        if !self.capture(host) {
            return None;
        }
        let slot = self.slot?;
        if view == self.target {
            return None;
        }
        if host.child_at(slot.container, slot.index) != Some(self.target) {
            log::warn!(
                "ViewReplacer: view {} no longer occupies index {} of {}",
                self.target,
                slot.index,
                slot.container
            );
            return None;
        }

        match self.swap(host, slot, self.target, view) {
            Ok(()) => {
                let displaced = std::mem::replace(&mut self.target, view);
                Some(displaced)
            }
            Err(err) => {
                log::warn!("ViewReplacer: could not place view {view}: {err}");
                None
            }
        }
    }

    /// Puts the source view back into its slot.
    ///
    /// Returns the view that was taken out, or `None` when the source view
    /// was never replaced.
    pub fn restore<H: ContainerHost + ?Sized>(&mut self, host: &mut H) -> Option<ViewId> {
        if !self.is_replaced() {
            return None;
        }
        let slot = self.slot?;
        let current = self.target;

        let result = match host.parent_of(current) {
            Some(parent) => host.remove_view(parent, current),
            None => {
                log::warn!("ViewReplacer: placeholder {current} was already detached");
                Ok(())
            }
        }
        .and_then(|()| host.add_view_at(slot.container, self.source, slot.index));

        if let Err(err) = result {
            log::warn!(
                "ViewReplacer: could not restore view {} at index {}: {err}",
                self.source,
                slot.index
            );
        }
        self.target = self.source;
        Some(current)
    }

    fn swap<H: ContainerHost + ?Sized>(
        &self,
        host: &mut H,
        slot: Slot,
        occupant: ViewId,
        view: ViewId,
    ) -> Result<(), TreeError> {
        if let Some(parent) = host.parent_of(view) {
            host.remove_view(parent, view)?;
        }
        if host.layout_params(view).is_none() {
            let params = host.layout_params(self.source);
            host.set_layout_params(view, params)?;
        }
        host.remove_view(slot.container, occupant)?;
        if let Err(err) = host.add_view_at(slot.container, view, slot.index) {
            let _ = host.add_view_at(slot.container, occupant, slot.index);
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/view_replacer_tests.rs"]
mod tests;
