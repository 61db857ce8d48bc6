//! Registry of live view sessions keyed by view id.

use std::collections::HashMap;
use std::sync::Mutex;

use account_service_lib::presentation::{ViewLoad, ViewSession};
use common::{AppError, AppResult};
use domain::NotificationSink;

/// Sessions kept before the least recently used one is evicted
pub const DEFAULT_VIEW_CAPACITY: usize = 10_000;

#[derive(Debug)]
struct Entry {
    session: ViewSession,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Sessions {
    entries: HashMap<String, Entry>,
    clock: u64,
}

/// View sessions created on first use of a view id.
///
/// The map lock is held for the whole load so a view is never greeted twice.
/// At most `capacity` sessions are kept; opening one more evicts the least
/// recently loaded view, which greets again if it comes back.
#[derive(Debug)]
pub struct ViewRegistry {
    sessions: Mutex<Sessions>,
    capacity: usize,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_VIEW_CAPACITY)
    }
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Mutex::new(Sessions::default()),
            capacity: capacity.max(1),
        }
    }

    /// Dispatch a load event to the session for `view_id`.
    pub fn load(
        &self,
        view_id: &str,
        event: &ViewLoad,
        messages: &mut dyn NotificationSink,
    ) -> AppResult<bool> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::internal("view registry lock poisoned"))?;

        if !sessions.entries.contains_key(view_id) && sessions.entries.len() >= self.capacity {
            sessions.evict_oldest();
        }

        sessions.clock += 1;
        let now = sessions.clock;
        let entry = sessions
            .entries
            .entry(view_id.to_string())
            .or_insert_with(|| Entry {
                session: ViewSession::new(),
                last_used: now,
            });
        entry.last_used = now;

        Ok(entry.session.on_view_load(event, messages))
    }

    /// Drop the session for `view_id`; a later load starts a fresh instance.
    pub fn discard(&self, view_id: &str) -> AppResult<bool> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::internal("view registry lock poisoned"))?;

        Ok(sessions.entries.remove(view_id).is_some())
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .map(|sessions| sessions.entries.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sessions {
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| id.clone());

        if let Some(id) = oldest {
            tracing::debug!(view_id = %id, "Evicting idle view session");
            self.entries.remove(&id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::MessageContext;

    #[test]
    fn test_one_greeting_per_view_id() {
        let registry = ViewRegistry::new();
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), Some("Lovelace"));

        assert!(registry.load("home", &event, &mut messages).unwrap());
        assert!(!registry.load("home", &event, &mut messages).unwrap());
        assert!(registry.load("profile", &event, &mut messages).unwrap());

        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_discard_starts_fresh_instance() {
        let registry = ViewRegistry::new();
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), None);

        registry.load("home", &event, &mut messages).unwrap();
        assert!(registry.discard("home").unwrap());
        assert!(registry.load("home", &event, &mut messages).unwrap());
        assert!(!registry.discard("missing").unwrap());
    }

    #[test]
    fn test_capacity_bounds_sessions() {
        let registry = ViewRegistry::with_capacity(2);
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), None);

        for id in 0..50 {
            registry.load(&format!("view-{id}"), &event, &mut messages).unwrap();
        }

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_evicted_view_greets_again() {
        let registry = ViewRegistry::with_capacity(2);
        let mut messages = MessageContext::new();
        let event = ViewLoad::initial(Some("Ada"), None);

        registry.load("home", &event, &mut messages).unwrap();
        registry.load("profile", &event, &mut messages).unwrap();
        // touching home leaves profile as the least recently used
        assert!(!registry.load("home", &event, &mut messages).unwrap());

        assert!(registry.load("settings", &event, &mut messages).unwrap());
        assert!(!registry.load("home", &event, &mut messages).unwrap());
        assert!(registry.load("profile", &event, &mut messages).unwrap());
    }
}
