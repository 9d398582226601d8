//! Thread-safe ordered storage for committed strokes.

use std::sync::RwLock;

use crate::types::PointGroup;

use super::events::StrokeEvent;

/// Ordered storage for the strokes of one drawing session.
///
/// Insertion order is drawing order, which re-render and export rely on.
/// Interior mutability via RwLock allows export encoders to read while the
/// pipeline appends.
pub struct StrokeLog {
    /// Committed groups in drawing order.
    groups: RwLock<Vec<PointGroup>>,
    /// Event listeners for external hooks. Each listener receives cloned
    /// events.
    #[allow(clippy::type_complexity)]
    event_listeners: RwLock<Vec<Box<dyn Fn(StrokeEvent) + Send + Sync>>>,
}

impl std::fmt::Debug for StrokeLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let group_count = self.groups.read().map(|g| g.len()).unwrap_or(0);
        let listener_count = self.event_listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("StrokeLog")
            .field("group_count", &group_count)
            .field("listener_count", &listener_count)
            .finish()
    }
}

impl Default for StrokeLog {
    fn default() -> Self {
        Self {
            groups: RwLock::new(Vec::new()),
            event_listeners: RwLock::new(Vec::new()),
        }
    }
}

impl StrokeLog {
    /// Create a new empty stroke log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed stroke.
    ///
    /// Emits a `StrokeCompleted` event to all registered listeners.
    pub fn append(&self, group: PointGroup) {
        {
            let mut groups = self.groups.write().expect("StrokeLog lock poisoned");
            groups.push(group.clone());
        }
        self.emit_event(StrokeEvent::StrokeCompleted { group });
    }

    /// All committed groups in drawing order.
    pub fn groups(&self) -> Vec<PointGroup> {
        let groups = self.groups.read().expect("StrokeLog lock poisoned");
        groups.clone()
    }

    /// Number of committed groups.
    pub fn group_count(&self) -> usize {
        let groups = self.groups.read().expect("StrokeLog lock poisoned");
        groups.len()
    }

    /// Total number of recorded samples across all groups.
    pub fn point_count(&self) -> usize {
        let groups = self.groups.read().expect("StrokeLog lock poisoned");
        groups.iter().map(|g| g.points.len()).sum()
    }

    /// Whether any stroke has been committed.
    pub fn is_empty(&self) -> bool {
        let groups = self.groups.read().expect("StrokeLog lock poisoned");
        groups.is_empty()
    }

    /// Drop every committed stroke.
    ///
    /// The one departure from append-only storage; backs the pad's clear
    /// command.
    pub fn clear(&self) {
        let mut groups = self.groups.write().expect("StrokeLog lock poisoned");
        groups.clear();
    }

    /// Register an event listener for external hooks.
    ///
    /// Listeners receive a cloned `StrokeCompleted` for every appended
    /// group.
    pub fn add_event_listener<F>(&self, listener: F)
    where
        F: Fn(StrokeEvent) + Send + Sync + 'static,
    {
        let mut listeners = self
            .event_listeners
            .write()
            .expect("StrokeLog lock poisoned");
        listeners.push(Box::new(listener));
    }

    /// Emit an event to all registered listeners.
    fn emit_event(&self, event: StrokeEvent) {
        let listeners = self
            .event_listeners
            .read()
            .expect("StrokeLog lock poisoned");
        for listener in listeners.iter() {
            listener(event.clone());
        }
    }
}
