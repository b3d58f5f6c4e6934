use crate::roster::ParsedRoster;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Opaque handle returned by an upload; later requests must present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Default)]
struct Sessions {
    rosters: HashMap<SessionId, Arc<ParsedRoster>>,
    order: VecDeque<SessionId>,
}

/// Parsed rosters keyed by session, so concurrent uploads never see each
/// other's documents.
///
/// With a capacity, inserting past the limit evicts the oldest session.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<Sessions>,
    capacity: Option<usize>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: RwLock::new(Sessions::default()),
            capacity: Some(capacity.max(1)),
        }
    }

    pub fn insert(&self, roster: ParsedRoster) -> SessionId {
        self.insert_shared(Arc::new(roster))
    }

    /// Stores a roster the caller keeps a handle to, so it stays readable
    /// even if a later insert evicts the session.
    pub fn insert_shared(&self, roster: Arc<ParsedRoster>) -> SessionId {
        let id = SessionId::new();
        let mut guard = self.sessions.write();
        if let Some(capacity) = self.capacity {
            while guard.rosters.len() >= capacity {
                let Some(oldest) = guard.order.pop_front() else {
                    break;
                };
                guard.rosters.remove(&oldest);
                tracing::debug!(session = %oldest, "evicted roster session");
            }
        }
        guard.rosters.insert(id, roster);
        guard.order.push_back(id);
        tracing::info!(session = %id, "stored roster session");
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<Arc<ParsedRoster>> {
        self.sessions.read().rosters.get(id).cloned()
    }

    /// Swaps in a freshly parsed roster for an existing session.
    pub fn replace(&self, id: &SessionId, roster: ParsedRoster) -> bool {
        let mut guard = self.sessions.write();
        match guard.rosters.get_mut(id) {
            Some(slot) => {
                *slot = Arc::new(roster);
                tracing::info!(session = %id, "replaced roster session");
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: &SessionId) -> bool {
        let mut guard = self.sessions.write();
        let removed = guard.rosters.remove(id).is_some();
        if removed {
            guard.order.retain(|existing| existing != id);
        }
        removed
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.sessions.read().rosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
