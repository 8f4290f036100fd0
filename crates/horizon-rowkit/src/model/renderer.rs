//! Row renderers and the reuse machinery around them.
//!
//! A renderer is the view-side object a host recycles across rows. The
//! converter never keeps renderer instances; it registers a factory for a
//! reuse identifier the first time a kind is needed, dequeues an instance,
//! binds the row payload into it and hands it straight back to the host.
//!
//! Kinds are resolved through an explicit [`RendererRegistry`] built up
//! front by the owning screen. A row naming an unregistered kind is a
//! configuration error, surfaced as
//! [`RowKitError::UnknownRendererKind`](crate::error::RowKitError).

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::data::RowData;

/// Suffix appended to a kind name to derive its default reuse identifier.
const REUSE_ID_SUFFIX: &str = "ID";

/// Tag identifying a renderer kind.
///
/// Kinds are declared as constants by the screen that owns the rows and
/// resolved against a [`RendererRegistry`] at registration time; there is
/// no runtime type reflection involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererKind(&'static str);

impl RendererKind {
    /// Declare a renderer kind.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The kind name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.0
    }

    /// The reuse identifier derived from the kind name.
    ///
    /// Deterministic and stable: the kind name plus a fixed suffix.
    pub fn default_reuse_identifier(&self) -> String {
        format!("{}{}", self.0, REUSE_ID_SUFFIX)
    }
}

impl std::fmt::Display for RendererKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Delegate handed to a renderer at bind time.
///
/// The hosting controller implements this to receive renderer-originated
/// events (a button inside a row, for example). The reference is scoped to
/// the bind call; renderers must not store it.
pub trait RowEventDelegate {
    /// Called by a renderer when it wants to notify its controller.
    fn renderer_event(&self, payload: &RowData);
}

/// A reusable row renderer.
///
/// Implementations accept bound payload data plus a delegate reference and
/// a separator-visibility flag computed from the row position.
pub trait RowRenderer: Send {
    /// Bind a row payload into this renderer.
    ///
    /// Called once per dequeue, before the renderer is returned to the
    /// host. The delegate is valid for the duration of this call only.
    fn bind(&mut self, payload: &RowData, delegate: &dyn RowEventDelegate);

    /// Show or hide the row's bottom separator.
    fn set_separator_visible(&mut self, visible: bool);

    /// Access the concrete renderer type.
    fn as_any(&self) -> &dyn Any;
}

/// Factory producing fresh renderer instances for one kind.
pub type RendererFactory = Arc<dyn Fn() -> Box<dyn RowRenderer> + Send + Sync>;

/// Registration table mapping renderer kinds to factories.
///
/// Built by the owning screen before rows are bound. Lookups happen on the
/// cell dispatch path; registration is expected only during setup.
#[derive(Default)]
pub struct RendererRegistry {
    factories: HashMap<RendererKind, RendererFactory>,
}

impl RendererRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for a kind, replacing any previous one.
    pub fn register<F>(&mut self, kind: RendererKind, factory: F)
    where
        F: Fn() -> Box<dyn RowRenderer> + Send + Sync + 'static,
    {
        tracing::debug!(
            target: "horizon_rowkit::renderer",
            kind = kind.name(),
            "registering renderer factory"
        );
        self.factories.insert(kind, Arc::new(factory));
    }

    /// Looks up the factory for a kind.
    pub fn factory(&self, kind: RendererKind) -> Option<RendererFactory> {
        self.factories.get(&kind).cloned()
    }

    /// Returns `true` if a factory is registered for the kind.
    pub fn contains(&self, kind: RendererKind) -> bool {
        self.factories.contains_key(&kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("kinds", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Host-owned pool of reusable renderer instances keyed by identifier.
///
/// The converter only ever registers-then-dequeues; instance lifecycle and
/// recycling belong to the hosting list view.
pub trait ReusePool {
    /// Returns `true` if a factory is registered under the identifier.
    fn has_factory(&self, identifier: &str) -> bool;

    /// Registers a factory under the identifier, replacing any previous one.
    fn register_factory(&mut self, identifier: &str, factory: RendererFactory);

    /// Produces a renderer for the identifier.
    ///
    /// Returns `None` if no factory is registered under it.
    fn dequeue(&mut self, identifier: &str) -> Option<Box<dyn RowRenderer>>;

    /// Returns a renderer to the pool for later reuse.
    fn recycle(&mut self, identifier: &str, renderer: Box<dyn RowRenderer>);
}

struct PoolEntry {
    factory: RendererFactory,
    idle: Vec<Box<dyn RowRenderer>>,
}

/// Ready-made [`ReusePool`] implementation.
///
/// Dequeue prefers an idle recycled instance and falls back to the
/// factory. Hosts with their own recycling strategy can implement
/// [`ReusePool`] directly instead.
#[derive(Default)]
pub struct RendererPool {
    entries: HashMap<String, PoolEntry>,
}

impl RendererPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of idle instances currently pooled under an identifier.
    pub fn idle_count(&self, identifier: &str) -> usize {
        self.entries.get(identifier).map_or(0, |e| e.idle.len())
    }
}

impl ReusePool for RendererPool {
    fn has_factory(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    fn register_factory(&mut self, identifier: &str, factory: RendererFactory) {
        tracing::trace!(
            target: "horizon_rowkit::renderer",
            identifier,
            "registering reuse identifier"
        );
        self.entries.insert(
            identifier.to_string(),
            PoolEntry {
                factory,
                idle: Vec::new(),
            },
        );
    }

    fn dequeue(&mut self, identifier: &str) -> Option<Box<dyn RowRenderer>> {
        let entry = self.entries.get_mut(identifier)?;
        match entry.idle.pop() {
            Some(renderer) => Some(renderer),
            None => Some((entry.factory)()),
        }
    }

    fn recycle(&mut self, identifier: &str, renderer: Box<dyn RowRenderer>) {
        if let Some(entry) = self.entries.get_mut(identifier) {
            entry.idle.push(renderer);
        }
    }
}

impl std::fmt::Debug for RendererPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererPool")
            .field("identifiers", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: RendererKind = RendererKind::new("BadgeRow");

    struct CountingRenderer {
        serial: u32,
    }

    impl RowRenderer for CountingRenderer {
        fn bind(&mut self, _payload: &RowData, _delegate: &dyn RowEventDelegate) {}
        fn set_separator_visible(&mut self, _visible: bool) {}
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn counting_factory() -> RendererFactory {
        let serial = Arc::new(parking_lot::Mutex::new(0u32));
        Arc::new(move || {
            let mut s = serial.lock();
            *s += 1;
            Box::new(CountingRenderer { serial: *s })
        })
    }

    #[test]
    fn test_derived_identifier_suffix() {
        assert_eq!(BADGE.default_reuse_identifier(), "BadgeRowID");
        // Deterministic across calls
        assert_eq!(
            BADGE.default_reuse_identifier(),
            BADGE.default_reuse_identifier()
        );
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = RendererRegistry::new();
        assert!(registry.is_empty());

        registry.register(BADGE, || Box::new(CountingRenderer { serial: 0 }));
        assert!(registry.contains(BADGE));
        assert!(registry.factory(BADGE).is_some());
        assert!(registry.factory(RendererKind::new("Other")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_pool_dequeue_without_factory() {
        let mut pool = RendererPool::new();
        assert!(!pool.has_factory("BadgeRowID"));
        assert!(pool.dequeue("BadgeRowID").is_none());
    }

    #[test]
    fn test_pool_recycles_instances() {
        let mut pool = RendererPool::new();
        pool.register_factory("BadgeRowID", counting_factory());

        let first = pool.dequeue("BadgeRowID").unwrap();
        let serial = first
            .as_any()
            .downcast_ref::<CountingRenderer>()
            .unwrap()
            .serial;
        assert_eq!(serial, 1);

        pool.recycle("BadgeRowID", first);
        assert_eq!(pool.idle_count("BadgeRowID"), 1);

        // The recycled instance comes back instead of a fresh one
        let second = pool.dequeue("BadgeRowID").unwrap();
        let serial = second
            .as_any()
            .downcast_ref::<CountingRenderer>()
            .unwrap()
            .serial;
        assert_eq!(serial, 1);
        assert_eq!(pool.idle_count("BadgeRowID"), 0);
    }
}
