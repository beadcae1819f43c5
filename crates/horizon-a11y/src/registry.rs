//! Identity registry for widgets that have an accessible node.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use horizon_a11y_core::{Item, WidgetId};

/// Tracks which widgets are currently registered with the bridge.
///
/// The registry only answers membership questions and hands out widgets for
/// activation routing. It holds weak references: widgets stay owned by the
/// widget framework.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<WidgetId, Weak<dyn Item>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is registered.
    #[inline]
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Register `item` under `id`.
    ///
    /// Returns `false` and leaves the existing entry alone if `id` is
    /// already registered.
    pub fn register(&mut self, id: WidgetId, item: &Rc<dyn Item>) -> bool {
        if self.is_registered(id) {
            return false;
        }
        self.entries.insert(id, Rc::downgrade(item));
        true
    }

    /// Unregister `id`. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: WidgetId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// The widget registered under `id`, if it is still alive.
    pub fn get(&self, id: WidgetId) -> Option<Rc<dyn Item>> {
        self.entries.get(&id).and_then(Weak::upgrade)
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unregister everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget(u64);

    impl Item for Widget {
        fn id(&self) -> WidgetId {
            WidgetId::new(self.0)
        }
        fn name(&self) -> String {
            format!("widget {}", self.0)
        }
        fn accessibility_code(&self) -> i32 {
            4
        }
    }

    fn widget(raw: u64) -> Rc<dyn Item> {
        Rc::new(Widget(raw))
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        let first = widget(1);
        let second = widget(1);

        assert!(registry.register(first.id(), &first));
        assert!(!registry.register(second.id(), &second));
        assert_eq!(registry.len(), 1);
        assert!(Rc::ptr_eq(&registry.get(first.id()).unwrap(), &first));
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut registry = Registry::new();
        let item = widget(2);
        registry.register(item.id(), &item);

        assert!(registry.unregister(item.id()));
        assert!(!registry.unregister(item.id()));
        assert!(!registry.unregister(WidgetId::new(99)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_does_not_own_widgets() {
        let mut registry = Registry::new();
        let item = widget(3);
        let id = item.id();
        registry.register(id, &item);
        drop(item);

        assert!(registry.is_registered(id));
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = Registry::new();
        let items: Vec<_> = (0..5).map(widget).collect();
        for item in &items {
            registry.register(item.id(), item);
        }
        assert_eq!(registry.len(), 5);

        registry.clear();
        assert!(registry.is_empty());
        assert!(!registry.is_registered(WidgetId::new(0)));
    }
}
