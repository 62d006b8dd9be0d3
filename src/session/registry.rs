//! Process-wide mapping from session key to a live battle simulator.
//!
//! The registry serializes access for a multi-threaded service: the map
//! sits behind one mutex, and every session carries its own lock so two
//! requests for the same session never race inside the simulator. Idle
//! sessions are reclaimed by [`SessionRegistry::evict_idle`]; the service
//! decides the sweep cadence.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::battle::logic::BattleSimulator;

/// Opaque handle to one active battle run.
pub type SessionKey = Uuid;

struct SessionEntry {
    simulator: Arc<Mutex<BattleSimulator>>,
    last_access: Instant,
}

/// Registry of active battle sessions.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionKey, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self) -> MutexGuard<'_, HashMap<SessionKey, SessionEntry>> {
        // A panic while holding the lock leaves the map consistent enough
        // to keep serving; recover instead of propagating the poison.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Starts a new battle run for the given account and returns its key.
    pub fn create(&self, user_id: i64) -> SessionKey {
        let key = Uuid::new_v4();
        let simulator = BattleSimulator::new(user_id, &mut rand::thread_rng());
        self.map().insert(
            key,
            SessionEntry {
                simulator: Arc::new(Mutex::new(simulator)),
                last_access: Instant::now(),
            },
        );
        log::info!("session {} created for user {}", key, user_id);
        key
    }

    /// Looks up a live session and refreshes its idle clock.
    pub fn get(&self, key: &SessionKey) -> Option<Arc<Mutex<BattleSimulator>>> {
        let mut map = self.map();
        let entry = map.get_mut(key)?;
        entry.last_access = Instant::now();
        Some(Arc::clone(&entry.simulator))
    }

    /// Drops a session, returning its simulator so the caller can still
    /// read the final summary.
    pub fn remove(&self, key: &SessionKey) -> Option<Arc<Mutex<BattleSimulator>>> {
        let entry = self.map().remove(key)?;
        log::info!("session {} removed", key);
        Some(entry.simulator)
    }

    /// Evicts every session untouched for longer than `max_idle`.
    /// Returns the number of sessions dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut map = self.map();
        let before = map.len();
        map.retain(|_, entry| entry.last_access.elapsed() <= max_idle);
        let evicted = before - map.len();
        if evicted > 0 {
            log::info!("evicted {} idle session(s)", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}
