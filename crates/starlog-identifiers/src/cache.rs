use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use starlog_core::constants::NBSP_ENTITY;
use starlog_core::traits::IdentifierSink;
use tracing::trace;

/// Lookup key for a raw identifier: trimmed and lowercased.
pub fn normalize_key(raw_id: &str) -> String {
    raw_id.trim().to_lowercase()
}

fn sanitize(display_text: &str) -> String {
    display_text.replace(NBSP_ENTITY, " ")
}

/// Raw identifier → display text, with a mutation counter.
///
/// Writes take `&mut self`. Readers on other threads need the owner's own
/// synchronisation; the cache does not lock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierCache {
    generation: u64,
    items: HashMap<String, String>,
}

impl IdentifierCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a translation unless it is an untranslated passthrough (`raw_id == display_text`).
    ///
    /// Every accepted write bumps the generation, including an overwrite with
    /// the value already stored. Returns whether the write was accepted.
    pub fn put(&mut self, raw_id: &str, display_text: &str) -> bool {
        if raw_id == display_text {
            return false;
        }
        self.put_forced(raw_id, display_text);
        true
    }

    /// Store a translation even when it equals the raw identifier.
    pub fn put_forced(&mut self, raw_id: &str, display_text: &str) {
        let key = normalize_key(raw_id);
        let text = sanitize(display_text);
        trace!(key = %key, text = %text, "identifier");
        self.items.insert(key, text);
        self.generation += 1;
    }

    /// Display text for `raw_id`, or `raw_id` itself when unknown.
    pub fn get(&self, raw_id: &str) -> String {
        self.lookup(raw_id)
            .map_or_else(|| raw_id.to_string(), str::to_string)
    }

    /// Display text for `raw_id`, or `None` when unknown.
    pub fn lookup(&self, raw_id: &str) -> Option<&str> {
        self.items.get(&normalize_key(raw_id)).map(String::as_str)
    }

    /// Count of accepted writes since creation. Never decreases.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Normalised keys and their display text, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IdentifierSink for IdentifierCache {
    fn put(&mut self, raw_id: &str, display_text: &str) -> bool {
        IdentifierCache::put(self, raw_id, display_text)
    }
}
