use std::sync::LazyLock;

use leptos::prelude::*;

/// Shared registry of the click-mode tooltip currently holding the open slot.
///
/// Instances register their key when opening and release it when closing or
/// unmounting; every open instance watches the slot and closes itself when a
/// different key takes it. Comparing keys makes opening inherently safe
/// against closing yourself.
///
/// Apps can scope coordination with `provide_context(ClickCoordinator::new())`;
/// without a provider all tooltips share one process-wide coordinator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickCoordinator {
    open: RwSignal<Option<u64>>,
}

impl ClickCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the open slot. Displaces any previous holder, whose watcher
    /// effect will observe the change and close it.
    pub(crate) fn notify_open(&self, key: u64) {
        self.open.set(Some(key));
    }

    /// Release the open slot, a no-op unless `key` is the current holder.
    pub(crate) fn notify_closed(&self, key: u64) {
        self.open.update(|cur| {
            if *cur == Some(key) {
                *cur = None;
            }
        });
    }

    /// Reactive: does `key` currently hold the open slot?
    pub(crate) fn holds(&self, key: u64) -> bool {
        self.open.get() == Some(key)
    }

    #[cfg(test)]
    fn holder(&self) -> Option<u64> {
        self.open.get_untracked()
    }
}

static FALLBACK: LazyLock<ClickCoordinator> = LazyLock::new(ClickCoordinator::new);

/// The coordinator from context, or the process-wide fallback.
pub fn use_click_coordinator() -> ClickCoordinator {
    use_context::<ClickCoordinator>().unwrap_or(*FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_claims_slot() {
        let coord = ClickCoordinator::new();
        assert_eq!(coord.holder(), None);
        coord.notify_open(1);
        assert_eq!(coord.holder(), Some(1));
    }

    #[test]
    fn second_open_displaces_first() {
        let coord = ClickCoordinator::new();
        coord.notify_open(1);
        coord.notify_open(2);
        assert_eq!(coord.holder(), Some(2));
    }

    #[test]
    fn close_by_holder_clears_slot() {
        let coord = ClickCoordinator::new();
        coord.notify_open(1);
        coord.notify_closed(1);
        assert_eq!(coord.holder(), None);
    }

    #[test]
    fn close_by_non_holder_is_noop() {
        let coord = ClickCoordinator::new();
        coord.notify_open(2);
        coord.notify_closed(1);
        assert_eq!(coord.holder(), Some(2));
    }
}
