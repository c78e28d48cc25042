use super::*;
use std::sync::Arc;
use std::sync::RwLock;
use tokio::sync::Notify;

/// Single source of truth for the latest known table snapshot.
///
/// Holds exactly one snapshot or none (pre-connection / disconnected). The
/// writing handle is deliberately not `Clone`: it belongs to the session
/// client, and everything else observes through cheap [`StoreReader`] handles.
/// Replacement is atomic from the reader's perspective; no reader ever sees a
/// partially updated snapshot, and no field-level merging ever happens.
#[derive(Debug, Default)]
pub struct SessionStore {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    snapshot: RwLock<Option<TableSnapshot>>,
    changed: Notify,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
    /// A read-only handle onto the same snapshot.
    pub fn reader(&self) -> StoreReader {
        StoreReader {
            shared: Arc::clone(&self.shared),
        }
    }
    /// Unconditionally replaces the snapshot. Last write wins.
    pub fn replace(&self, snapshot: TableSnapshot) {
        *self.shared.snapshot.write().expect("snapshot lock") = Some(snapshot);
        self.shared.changed.notify_waiters();
    }
    /// Empties the store, returning readers to the "not yet connected" state.
    pub fn clear(&self) {
        *self.shared.snapshot.write().expect("snapshot lock") = None;
        self.shared.changed.notify_waiters();
    }
    /// The current snapshot, or none.
    pub fn get(&self) -> Option<TableSnapshot> {
        self.shared.snapshot.read().expect("snapshot lock").clone()
    }
    /// Second writing handle for the session's reader task. Crate-private so
    /// the single-writer rule stays enforced at the public API surface.
    pub(crate) fn writer(&self) -> SessionStore {
        SessionStore {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Read access to the latest snapshot.
#[derive(Debug, Clone)]
pub struct StoreReader {
    shared: Arc<Shared>,
}

impl StoreReader {
    /// The current snapshot, or none.
    pub fn get(&self) -> Option<TableSnapshot> {
        self.shared.snapshot.read().expect("snapshot lock").clone()
    }
    /// True once a snapshot has arrived.
    pub fn is_connected(&self) -> bool {
        self.shared.snapshot.read().expect("snapshot lock").is_some()
    }
    /// Resolves after the next replace or clear. Wakeups are edge-triggered;
    /// callers re-read the store rather than assume what changed.
    pub async fn changed(&self) {
        self.shared.changed.notified().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(table: TableId, pot: Chips) -> TableSnapshot {
        TableSnapshot {
            table_id: table,
            street: Street::Preflop,
            community_cards: Vec::new(),
            pot,
            pots: Vec::new(),
            current_bet: 0.0,
            current_player: None,
            players: Vec::new(),
            hand_in_progress: true,
            turn_timeout: None,
            turn_deadline: None,
        }
    }

    #[test]
    fn starts_empty() {
        let store = SessionStore::new();
        assert!(store.get().is_none());
        assert!(!store.reader().is_connected());
    }

    #[test]
    fn replacement_is_total() {
        let store = SessionStore::new();
        let first = TableSnapshot {
            current_bet: 40.0,
            current_player: Some(7),
            ..snapshot(5, 120.0)
        };
        let second = snapshot(5, 0.0);
        store.replace(first);
        store.replace(second.clone());
        // nothing from the first snapshot survives
        assert_eq!(store.get(), Some(second));
    }

    #[test]
    fn clear_empties() {
        let store = SessionStore::new();
        store.replace(snapshot(5, 10.0));
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn readers_share_the_writers_view() {
        let store = SessionStore::new();
        let reader = store.reader();
        store.replace(snapshot(3, 50.0));
        assert_eq!(reader.get().map(|s| s.table_id), Some(3));
        assert!(reader.is_connected());
    }

    #[tokio::test]
    async fn changed_wakes_on_replace() {
        let store = SessionStore::new();
        let reader = store.reader();
        let waiter = tokio::spawn(async move {
            reader.changed().await;
            reader.get()
        });
        tokio::task::yield_now().await;
        store.replace(snapshot(5, 10.0));
        let seen = tokio::time::timeout(std::time::Duration::from_secs(5), waiter)
            .await
            .expect("waiter wakes")
            .expect("waiter completes");
        assert_eq!(seen.map(|s| s.table_id), Some(5));
    }
}
