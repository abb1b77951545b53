//! Latest-request guard.
//!
//! Every request takes a token from [`LatestOnly::begin`] before starting
//! work. When the work finishes, [`LatestOnly::commit`] stores the result
//! only if no newer request has begun in the meantime, so a slow, older
//! request can never overwrite the result of a newer one.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use swatch::Extraction;
use tokio::sync::{Mutex, RwLock};

/// Position of a request in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

struct Slot<T> {
    issued: u64,
    value: Option<T>,
}

/// Holds the result of the most recently started request.
pub struct LatestOnly<T> {
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> LatestOnly<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                issued: 0,
                value: None,
            }),
        }
    }

    /// Issue a token newer than every previous one.
    pub async fn begin(&self) -> RequestToken {
        let mut slot = self.slot.lock().await;
        slot.issued += 1;
        RequestToken(slot.issued)
    }

    /// Store `value` if `token` is the latest issued. Returns false for a
    /// stale token, leaving the current value untouched.
    pub async fn commit(&self, token: RequestToken, value: T) -> bool {
        let mut slot = self.slot.lock().await;
        if token.0 != slot.issued {
            return false;
        }
        slot.value = Some(value);
        true
    }

    /// Whether `token` is still the latest issued.
    pub async fn is_current(&self, token: RequestToken) -> bool {
        self.slot.lock().await.issued == token.0
    }

    /// Last committed value.
    pub async fn current(&self) -> Option<T> {
        self.slot.lock().await.value.clone()
    }
}

impl<T: Clone> Default for LatestOnly<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-session latest extraction results.
///
/// The oldest sessions are forgotten once `capacity` is reached.
pub struct ExtractionSessions {
    sessions: RwLock<SessionMap>,
    capacity: usize,
}

#[derive(Default)]
struct SessionMap {
    by_id: HashMap<String, Arc<LatestOnly<Extraction>>>,
    order: VecDeque<String>,
}

impl ExtractionSessions {
    pub const DEFAULT_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(SessionMap::default()),
            capacity: capacity.max(1),
        }
    }

    /// Guard for session `id`, created on first use.
    pub async fn session(&self, id: &str) -> Arc<LatestOnly<Extraction>> {
        if let Some(existing) = self.sessions.read().await.by_id.get(id) {
            return existing.clone();
        }

        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.by_id.get(id) {
            return existing.clone();
        }

        while sessions.order.len() >= self.capacity {
            if let Some(evicted) = sessions.order.pop_front() {
                sessions.by_id.remove(&evicted);
                tracing::debug!(session = %evicted, "Evicted extraction session");
            }
        }

        let guard = Arc::new(LatestOnly::new());
        sessions.by_id.insert(id.to_string(), guard.clone());
        sessions.order.push_back(id.to_string());
        guard
    }

    /// Latest committed extraction for `id`.
    pub async fn latest(&self, id: &str) -> Option<Extraction> {
        let guard = self.sessions.read().await.by_id.get(id).cloned()?;
        guard.current().await
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.by_id.len()
    }
}

impl Default for ExtractionSessions {
    fn default() -> Self {
        Self::new()
    }
}
