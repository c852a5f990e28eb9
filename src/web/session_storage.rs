use crate::admin::credentials::AdminSession;
use cached::{Cached, TimedSizedCache};

const CACHE_SIZE: usize = 100;
const SESSION_LIFESPAN_SECONDS: u64 = 60 * 60 * 24;

/// Where admin sessions live, indexed by the token handed to the client.
/// Only 100 sessions can be stored at a time: the oldest one is dropped when a new one comes.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, AdminSession>,
}

impl SessionStorage {
    pub fn store(&mut self, token: String, session: AdminSession) {
        self.sessions.cache_set(token, session);
    }

    pub fn get(&mut self, token: &str) -> Option<&AdminSession> {
        self.sessions.cache_get(token)
    }

    pub fn remove(&mut self, token: &str) -> Option<AdminSession> {
        self.sessions.cache_remove(token)
    }
}

impl Default for SessionStorage {
    /// By default, sessions expire after one day.
    fn default() -> Self {
        let sessions = TimedSizedCache::with_size_and_lifespan(CACHE_SIZE, SESSION_LIFESPAN_SECONDS);
        Self { sessions }
    }
}
