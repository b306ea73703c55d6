//! Per-window cleanup hooks run once when a window starts closing.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::model::WindowId;

type CleanupHook = Box<dyn FnOnce()>;

/// Shared registry of cleanup hooks keyed by window.
///
/// Hooks are drained by [`CleanupRegistry::run`], so each runs at most once even if the close
/// effect is delivered again.
#[derive(Clone, Default)]
pub struct CleanupRegistry {
    hooks: Rc<RefCell<HashMap<WindowId, Vec<CleanupHook>>>>,
}

impl CleanupRegistry {
    pub fn register(&self, window_id: WindowId, hook: impl FnOnce() + 'static) {
        self.hooks
            .borrow_mut()
            .entry(window_id)
            .or_default()
            .push(Box::new(hook));
    }

    /// Runs and drops the hooks for `window_id` in registration order. Returns how many ran.
    pub fn run(&self, window_id: WindowId) -> usize {
        // Release the borrow first: a hook may register or run hooks itself.
        let hooks = self.hooks.borrow_mut().remove(&window_id).unwrap_or_default();
        let count = hooks.len();
        for hook in hooks {
            hook();
        }
        count
    }

    pub fn pending(&self, window_id: WindowId) -> usize {
        self.hooks
            .borrow()
            .get(&window_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl std::fmt::Debug for CleanupRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanupRegistry")
            .field("windows", &self.hooks.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hooks_run_exactly_once_in_order() {
        let registry = CleanupRegistry::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second"] {
            let log = log.clone();
            registry.register(WindowId(1), move || log.borrow_mut().push(label));
        }

        assert_eq!(registry.pending(WindowId(1)), 2);
        assert_eq!(registry.run(WindowId(1)), 2);
        assert_eq!(registry.run(WindowId(1)), 0);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn hooks_are_scoped_to_their_window() {
        let registry = CleanupRegistry::default();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        registry.register(WindowId(2), move || flag.set(true));

        registry.run(WindowId(1));
        assert!(!fired.get());
        registry.run(WindowId(2));
        assert!(fired.get());
    }

    #[test]
    fn hooks_may_register_new_hooks_while_running() {
        let registry = CleanupRegistry::default();
        let inner = registry.clone();
        registry.register(WindowId(3), move || inner.register(WindowId(4), || {}));

        registry.run(WindowId(3));
        assert_eq!(registry.pending(WindowId(4)), 1);
    }
}
