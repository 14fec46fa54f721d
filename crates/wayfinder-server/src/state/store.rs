//! In-memory session store using DashMap.

use std::sync::Arc;

use dashmap::DashMap;
use wayfinder_advice::AdviceClient;

use crate::config::Config;
use crate::narration::{LogSpeaker, Narrator, Speaker};
use crate::session::Session;

/// Application state - sessions, advice client, and the narration slot.
pub struct AppState {
    sessions: DashMap<String, Session>,
    advice: AdviceClient,
    narrator: Narrator,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let speaker = Arc::new(LogSpeaker {
            ms_per_char: config.narration_ms_per_char,
        });
        Self::with_speaker(config, speaker)
    }

    pub fn with_speaker(config: Config, speaker: Arc<dyn Speaker>) -> Self {
        Self {
            sessions: DashMap::new(),
            advice: AdviceClient::new(&config.advice_url, &config.advice_api_key),
            narrator: Narrator::new(speaker),
            config,
        }
    }

    /// Create and store a fresh session.
    pub fn create_session(&self) -> Session {
        let session = Session::new(uuid::Uuid::new_v4().to_string());
        self.sessions.insert(session.id.clone(), session.clone());
        session
    }

    /// Snapshot of a session.
    pub fn get_session(&self, id: &str) -> Option<Session> {
        self.sessions.get(id).map(|r| r.value().clone())
    }

    /// Run a closure against a session under the map lock.
    pub fn with_session<R>(&self, id: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions.get_mut(id).map(|mut r| f(r.value_mut()))
    }

    pub fn advice(&self) -> &AdviceClient {
        &self.advice
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
