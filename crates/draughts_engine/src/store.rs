//! Sessions keyed by short identifiers
//!
//! A plain owned map from 8-character codes to [`GameSession`]s. There is no locking; a transport
//! that serves several chats wraps the store in whatever synchronization it already uses.

use std::collections::HashMap;

use rand::Rng;
use tracing::{debug, info};

use crate::api::GameSession;
use crate::constants::{SESSION_ID_CHARSET, SESSION_ID_LEN};

/// Registry of live sessions
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Random upper-case alphanumeric identifier
    pub fn generate_id() -> String {
        let mut rng = rand::rng();
        (0..SESSION_ID_LEN)
            .map(|_| SESSION_ID_CHARSET[rng.random_range(0..SESSION_ID_CHARSET.len())] as char)
            .collect()
    }

    /// Start a new game under a fresh identifier and return the identifier
    pub fn create(&mut self) -> String {
        let id = loop {
            let candidate = SessionStore::generate_id();
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        self.sessions.insert(id.clone(), GameSession::new());
        info!("[STORE] Created session {} ({} live)", id, self.sessions.len());
        id
    }

    /// Register an existing session, returning the one it replaces
    pub fn insert(&mut self, id: impl Into<String>, session: GameSession) -> Option<GameSession> {
        let id = id.into();
        debug!("[STORE] Stored session {}", id);
        self.sessions.insert(id, session)
    }

    pub fn get(&self, id: &str) -> Option<&GameSession> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<GameSession> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            info!("[STORE] Removed session {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Identifiers of every stored session, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.sessions.keys().map(String::as_str)
    }

    /// Drop every finished game, returning how many were removed
    pub fn prune_finished(&mut self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.is_active());
        let pruned = before - self.sessions.len();
        if pruned > 0 {
            info!("[STORE] Pruned {} finished session(s)", pruned);
        }
        pruned
    }
}
