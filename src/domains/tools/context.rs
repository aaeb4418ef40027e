//! Shared state handed to tool handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::core::config::Config;
use crate::core::storage::KeyValueStore;
use crate::domains::ai::AiClient;
use crate::domains::preferences::NotepadStore;

use super::definitions::Stopwatch;

/// Everything a tool may need beyond its own parameters.
///
/// Built once at startup and shared behind an `Arc`; most tools ignore it.
pub struct ToolContext {
    /// Server configuration.
    pub config: Arc<Config>,

    /// Persisted notepad blob.
    pub notepad: NotepadStore,

    /// Stopwatches keyed by the caller's id.
    pub stopwatches: Mutex<HashMap<String, Stopwatch>>,

    /// Generative AI shim.
    pub ai: AiClient,

    /// Client for plain outbound lookups.
    pub http: reqwest::Client,
}

impl ToolContext {
    /// Build the context from configuration and the shared store.
    pub fn new(config: Arc<Config>, storage: Arc<dyn KeyValueStore>) -> Self {
        let http = reqwest::Client::new();
        Self {
            ai: AiClient::new(&config, http.clone()),
            notepad: NotepadStore::new(storage),
            stopwatches: Mutex::new(HashMap::new()),
            http,
            config,
        }
    }
}

#[cfg(test)]
impl ToolContext {
    /// Context over an in-memory store and default configuration.
    pub fn for_tests() -> Arc<Self> {
        Arc::new(Self::new(
            Arc::new(Config::default()),
            Arc::new(crate::core::storage::MemoryStore::new()),
        ))
    }
}
