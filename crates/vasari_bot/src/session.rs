//! Admin upload sessions.
//!
//! One session per admin actor, holding where the next uploaded file goes.
//! `SetContext` replaces the whole session, never merges; there is no
//! terminal state, a session lives until replaced or the process restarts.

use crate::ActorId;
use parking_lot::Mutex;
use std::collections::HashMap;

/// The current upload target and cursor for one admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSession {
    /// Series display name as the admin typed it (original casing)
    pub series_display: String,
    /// Canonical series key
    pub series_key: String,
    /// Canonical season key
    pub season: String,
    /// Quality label for incoming files
    pub quality: String,
    /// Next episode number to assign
    pub cursor: u32,
}

/// Per-actor session registry.
///
/// Sessions are independent per actor, so a single process-wide mutex around
/// the map is all the synchronization this needs.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<ActorId, UploadSession>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (never merge) the actor's session.
    pub fn replace(&self, actor: ActorId, session: UploadSession) {
        self.sessions.lock().insert(actor, session);
    }

    /// Snapshot the actor's session, if any.
    pub fn snapshot(&self, actor: ActorId) -> Option<UploadSession> {
        self.sessions.lock().get(&actor).cloned()
    }

    /// Mutate the actor's session in place. Returns false when the actor has
    /// no session.
    pub fn update<F>(&self, actor: ActorId, f: F) -> bool
    where
        F: FnOnce(&mut UploadSession),
    {
        let mut sessions = self.sessions.lock();
        match sessions.get_mut(&actor) {
            Some(session) => {
                f(session);
                true
            }
            None => false,
        }
    }
}
