//! Email → remote-id lookup index.

use std::collections::HashMap;

use leadsync_core::RemoteLead;

/// Mapping from normalized (trimmed, lowercased) email to a remote lead id.
///
/// Duplicate emails resolve last-write-wins: a later page's record replaces
/// an earlier one.
#[derive(Debug, Clone, Default)]
pub struct LookupIndex {
    entries: HashMap<String, u64>,
}

impl LookupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one remote lead into the index. Records without a usable email
    /// are skipped silently — neither added nor counted as an error.
    pub fn add(&mut self, lead: &RemoteLead) {
        if let Some(key) = lead.email_key() {
            self.entries.insert(key, lead.id);
        }
    }

    /// Resolve a raw email (any case, surrounding whitespace tolerated).
    pub fn resolve(&self, email: &str) -> Option<u64> {
        self.entries.get(&email.trim().to_lowercase()).copied()
    }

    /// Whether a normalized key is present (callers must pre-normalize).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
