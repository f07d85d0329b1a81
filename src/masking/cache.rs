//! Memoization of scan results.
//!
//! Masked, unmasked and completed views, plus candidate selection for
//! mask sequences, all run the same underlying scan. The cache makes
//! those repeat runs a map lookup. Entries are only ever added; bounding
//! memory is left to the caller's masker lifetime.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Cache key: one scan is fully determined by these three inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ScanKey {
    value: String,
    pattern: String,
    with_literals: bool,
}

impl ScanKey {
    pub fn new(value: &str, pattern: &str, with_literals: bool) -> Self {
        Self {
            value: value.to_string(),
            pattern: pattern.to_string(),
            with_literals,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScanCache {
    entries: Mutex<HashMap<ScanKey, String>>,
}

impl ScanCache {
    pub fn get(&self, key: &ScanKey) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn store(&self, key: ScanKey, result: String) {
        self.lock().insert(key, result);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ScanKey, String>> {
        // Each insert is a single statement, so the map stays usable
        // even if a holder panicked.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
