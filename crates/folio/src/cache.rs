//! The process-wide description cache.
//!
//! One [`DescriptionEntry`] per project, created lazily by the first
//! upsert. Readers must tolerate absent or partially populated entries at
//! any time; "absent entry" is the loading state. Writers merge
//! non-destructively: a field is only ever filled in, never cleared, and
//! a resolved long-form description is never replaced for the lifetime of
//! the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A resolved (or resolving) project description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DescriptionEntry {
    /// Raw long-form markdown, absent until a fetch succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_form: Option<String>,

    /// Plain-text preview, absent until resolution completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_form: Option<String>,

    /// When the most recent upsert was applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl DescriptionEntry {
    /// Whether resolution has completed for this entry.
    ///
    /// Every resolution outcome sets `short_form`, so its presence is the
    /// completion signal; `long_form` stays absent on the fallback path.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.short_form.is_some()
    }

    /// Whether a long-form description was fetched.
    #[must_use]
    pub fn has_long_form(&self) -> bool {
        self.long_form.is_some()
    }
}

/// A partial update to merge into an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionUpdate {
    /// Long-form markdown to fill in, if any.
    pub long_form: Option<String>,
    /// Short-form preview to fill in, if any.
    pub short_form: Option<String>,
}

/// The shared description cache.
///
/// A lightweight, cloneable handle; clones share the same underlying map.
/// Created empty at startup, populated by resolution tasks, never pruned
/// during a run.
#[derive(Debug, Clone, Default)]
pub struct DescriptionCache {
    entries: Arc<RwLock<HashMap<String, DescriptionEntry>>>,
}

impl DescriptionCache {
    /// Create a new, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of the entry for `identifier`, if one exists yet.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<DescriptionEntry> {
        self.entries
            .read()
            .expect("description cache lock poisoned")
            .get(identifier)
            .cloned()
    }

    /// Merge `update` into the entry for `identifier`, creating it if
    /// needed.
    ///
    /// The merge is non-destructive: an absent field in `update` leaves
    /// the stored field untouched, and an already-present `long_form` is
    /// never replaced.
    pub fn upsert(&self, identifier: &str, update: DescriptionUpdate) {
        let mut entries = self
            .entries
            .write()
            .expect("description cache lock poisoned");
        let entry = entries.entry(identifier.to_string()).or_default();

        if entry.long_form.is_none() {
            if let Some(long_form) = update.long_form {
                entry.long_form = Some(long_form);
            }
        }
        if let Some(short_form) = update.short_form {
            entry.short_form = Some(short_form);
        }
        entry.resolved_at = Some(Utc::now());
    }

    /// Number of entries present (resolved or partial).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("description cache lock poisoned")
            .len()
    }

    /// Whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries whose resolution has completed.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.entries
            .read()
            .expect("description cache lock poisoned")
            .values()
            .filter(|e| e.is_resolved())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(text: &str) -> DescriptionUpdate {
        DescriptionUpdate {
            long_form: Some(text.to_string()),
            short_form: None,
        }
    }

    fn short(text: &str) -> DescriptionUpdate {
        DescriptionUpdate {
            long_form: None,
            short_form: Some(text.to_string()),
        }
    }

    #[test]
    fn test_get_absent_entry() {
        let cache = DescriptionCache::new();
        assert!(cache.get("a/b").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_upsert_creates_entry() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", short("preview"));

        let entry = cache.get("a/b").unwrap();
        assert_eq!(entry.short_form.as_deref(), Some("preview"));
        assert!(entry.long_form.is_none());
        assert!(entry.resolved_at.is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", long("# Readme"));
        cache.upsert("a/b", short("preview"));

        let entry = cache.get("a/b").unwrap();
        assert_eq!(entry.long_form.as_deref(), Some("# Readme"));
        assert_eq!(entry.short_form.as_deref(), Some("preview"));
    }

    #[test]
    fn test_long_form_is_write_once() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", long("original"));
        cache.upsert("a/b", long("replacement"));

        let entry = cache.get("a/b").unwrap();
        assert_eq!(entry.long_form.as_deref(), Some("original"));
    }

    #[test]
    fn test_absent_fields_leave_entry_untouched() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", long("kept"));
        cache.upsert("a/b", DescriptionUpdate::default());

        let entry = cache.get("a/b").unwrap();
        assert_eq!(entry.long_form.as_deref(), Some("kept"));
    }

    #[test]
    fn test_entries_are_independent() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", short("one"));
        cache.upsert("c/d", short("two"));

        assert_eq!(cache.get("a/b").unwrap().short_form.as_deref(), Some("one"));
        assert_eq!(cache.get("c/d").unwrap().short_form.as_deref(), Some("two"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_is_resolved() {
        let mut entry = DescriptionEntry::default();
        assert!(!entry.is_resolved());
        assert!(!entry.has_long_form());

        entry.short_form = Some("done".to_string());
        assert!(entry.is_resolved());
        assert!(!entry.has_long_form());
    }

    #[test]
    fn test_resolved_count() {
        let cache = DescriptionCache::new();
        cache.upsert("a/b", long("markdown only, not yet complete"));
        cache.upsert("c/d", short("complete"));

        assert_eq!(cache.resolved_count(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let cache = DescriptionCache::new();
        let view = cache.clone();

        cache.upsert("a/b", short("shared"));
        assert_eq!(
            view.get("a/b").unwrap().short_form.as_deref(),
            Some("shared")
        );
    }

    #[test]
    fn test_concurrent_upserts_do_not_interfere() {
        let cache = DescriptionCache::new();
        let mut handles = Vec::new();

        for i in 0..8 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                let id = format!("owner/repo-{i}");
                cache.upsert(&id, long(&format!("readme {i}")));
                cache.upsert(&id, short(&format!("preview {i}")));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8);
        for i in 0..8 {
            let entry = cache.get(&format!("owner/repo-{i}")).unwrap();
            assert_eq!(entry.long_form.as_deref(), Some(format!("readme {i}").as_str()));
            assert_eq!(
                entry.short_form.as_deref(),
                Some(format!("preview {i}").as_str())
            );
        }
    }

    #[test]
    fn test_entry_serializes_without_absent_fields() {
        let entry = DescriptionEntry {
            short_form: Some("preview".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("short_form"));
        assert!(!json.contains("long_form"));
    }
}
