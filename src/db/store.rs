// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory keyed document store.
//!
//! Provides the subset of a document-database collection API the
//! registration backend needs:
//! - Point lookup by `_id`
//! - Filtered scans over schedules
//! - Push/pull updates on list fields
//! - A distinct-days aggregation
//!
//! The store has no internal locking. Wrap it in a single lock before sharing
//! (see [`SharedDatabase`](crate::db::SharedDatabase)).

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::db::Filter;
use crate::error::{Result, StoreError};
use crate::models::{Document, ListField};

/// List update applied by [`RecordStore::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// Append a value, creating the list if needed.
    pub push: Option<(ListField, String)>,
    /// Remove the first occurrence of a value, if present.
    pub pull: Option<(ListField, String)>,
}

impl Update {
    pub fn push(field: ListField, value: impl Into<String>) -> Self {
        Self {
            push: Some((field, value.into())),
            pull: None,
        }
    }

    pub fn pull(field: ListField, value: impl Into<String>) -> Self {
        Self {
            push: None,
            pull: Some((field, value.into())),
        }
    }
}

/// Outcome of an update: 1 if the target document existed, else 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    pub modified_count: u64,
}

/// One row of a grouping aggregation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DistinctValue {
    #[serde(rename = "_id")]
    pub value: String,
}

/// Named collection of documents keyed by `_id`.
#[derive(Debug, Clone)]
pub struct RecordStore<D> {
    name: &'static str,
    docs: HashMap<String, D>,
}

impl<D: Document> RecordStore<D> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Store a document under its `_id`, replacing any existing one wholesale.
    pub fn insert(&mut self, doc: D) -> Result<()> {
        let id = doc.id();
        if id.is_empty() {
            tracing::warn!(store = self.name, "Rejected document without _id");
            return Err(StoreError::MissingId);
        }
        let id = id.to_string();
        let replaced = self.docs.insert(id.clone(), doc).is_some();
        tracing::debug!(store = self.name, id = %id, replaced, "Inserted document");
        Ok(())
    }

    /// Look up a document by `_id`.
    pub fn find_one(&self, id: &str) -> Option<&D> {
        let found = self.docs.get(id);
        tracing::debug!(store = self.name, id, found = found.is_some(), "find_one");
        found
    }

    /// Scan with an optional filter. Order is unspecified.
    pub fn find_many(&self, filter: Option<&Filter>) -> Vec<&D> {
        let matched: Vec<&D> = match filter {
            Some(filter) if !filter.is_empty() => {
                self.docs.values().filter(|d| filter.matches(*d)).collect()
            }
            _ => self.docs.values().collect(),
        };
        tracing::debug!(
            store = self.name,
            matched = matched.len(),
            total = self.docs.len(),
            "find_many"
        );
        matched
    }

    /// Apply a push and/or pull to the document with the given `_id`.
    ///
    /// Push runs before pull when both are given. Fields the document shape
    /// does not have are ignored.
    pub fn update(&mut self, id: &str, update: &Update) -> UpdateResult {
        let Some(doc) = self.docs.get_mut(id) else {
            tracing::debug!(store = self.name, id, "update target not found");
            return UpdateResult { modified_count: 0 };
        };

        if let Some((field, value)) = &update.push {
            match doc.list_field_mut(*field) {
                Some(list) => list.push(value.clone()),
                None => tracing::debug!(
                    store = self.name,
                    id,
                    field = ?field,
                    "push to absent field ignored"
                ),
            }
        }

        if let Some((field, value)) = &update.pull {
            match doc.list_field_mut(*field) {
                Some(list) => {
                    if let Some(pos) = list.iter().position(|v| v == value) {
                        list.remove(pos);
                    }
                }
                None => tracing::debug!(
                    store = self.name,
                    id,
                    field = ?field,
                    "pull from absent field ignored"
                ),
            }
        }

        tracing::debug!(store = self.name, id, modified_count = 1, "Updated document");
        UpdateResult { modified_count: 1 }
    }

    /// Number of documents matching the filter (all documents for `None`).
    pub fn count(&self, filter: Option<&Filter>) -> usize {
        let count = match filter {
            Some(filter) if !filter.is_empty() => {
                self.docs.values().filter(|d| filter.matches(*d)).count()
            }
            _ => self.docs.len(),
        };
        tracing::debug!(store = self.name, count, "count");
        count
    }

    /// Sorted, de-duplicated meeting days across all documents.
    pub fn distinct_days(&self) -> Vec<DistinctValue> {
        let days: BTreeSet<&str> = self
            .docs
            .values()
            .filter_map(|d| d.schedule())
            .flat_map(|s| s.days.iter().map(String::as_str))
            .collect();
        tracing::debug!(store = self.name, days = days.len(), "distinct_days");

        days.into_iter()
            .map(|day| DistinctValue {
                value: day.to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Role, ScheduleDetails, Teacher};
    use std::io;
    use std::sync::{Arc, Mutex};

    fn activity(name: &str, days: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{} description", name),
            schedule: String::new(),
            schedule_details: ScheduleDetails::new(days, "15:00", "16:00"),
            max_participants: 10,
            participants: vec!["a@mergington.edu".to_string()],
        }
    }

    /// Collects formatted log output from a scoped subscriber.
    #[derive(Clone, Default)]
    struct LogCapture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogCapture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl LogCapture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_debug_logs(f: impl FnOnce()) -> String {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn test_store_name() {
        let store: RecordStore<Activity> = RecordStore::new("activities");
        assert_eq!(store.name(), "activities");
    }

    #[test]
    fn test_count_and_distinct_days_emit_debug_events() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("A", &["Monday", "Friday"])).unwrap();

        let logs = with_debug_logs(|| {
            assert_eq!(store.count(None), 1);
            assert_eq!(store.distinct_days().len(), 2);
        });

        assert!(logs.contains("count"), "missing count event: {}", logs);
        assert!(logs.contains("count=1"), "missing count outcome: {}", logs);
        assert!(logs.contains("distinct_days"), "missing aggregation event: {}", logs);
        assert!(logs.contains("days=2"), "missing aggregation outcome: {}", logs);
        assert!(logs.contains("store=\"activities\""), "missing store name: {}", logs);
    }

    #[test]
    fn test_push_to_absent_field_is_logged() {
        let mut store = RecordStore::new("teachers");
        store
            .insert(Teacher {
                username: "mchen".to_string(),
                display_name: "Mr. Chen".to_string(),
                password: "hash".to_string(),
                role: Role::Teacher,
            })
            .unwrap();

        let logs = with_debug_logs(|| {
            store.update("mchen", &Update::push(ListField::Participants, "x"));
        });

        assert!(logs.contains("push to absent field ignored"), "{}", logs);
        assert!(logs.contains("Participants"), "{}", logs);
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("A", &["Monday"])).unwrap();
        store.insert(activity("B", &[])).unwrap();

        assert_eq!(store.find_many(Some(&Filter::all())).len(), 2);
        assert_eq!(store.count(Some(&Filter::all())), 2);
    }

    #[test]
    fn test_insert_rejects_empty_id() {
        let mut store = RecordStore::new("activities");
        let err = store.insert(activity("", &["Monday"])).unwrap_err();
        assert!(matches!(err, StoreError::MissingId));
        assert!(store.is_empty());
    }

    #[test]
    fn test_pull_removes_only_first_occurrence() {
        let mut store = RecordStore::new("activities");
        let mut a = activity("Art Club", &["Thursday"]);
        a.participants = vec!["x@m.edu".into(), "y@m.edu".into(), "x@m.edu".into()];
        store.insert(a).unwrap();

        let result = store.update("Art Club", &Update::pull(ListField::Participants, "x@m.edu"));
        assert_eq!(result.modified_count, 1);
        assert_eq!(
            store.find_one("Art Club").unwrap().participants,
            vec!["y@m.edu".to_string(), "x@m.edu".to_string()]
        );
    }

    #[test]
    fn test_pull_of_absent_value_still_counts_as_modified() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("Art Club", &["Thursday"])).unwrap();

        let result = store.update("Art Club", &Update::pull(ListField::Participants, "nobody"));
        assert_eq!(result.modified_count, 1);
        assert_eq!(store.find_one("Art Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_push_and_pull_in_one_update() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("Art Club", &["Thursday"])).unwrap();

        let update = Update {
            push: Some((ListField::Participants, "b@mergington.edu".to_string())),
            pull: Some((ListField::Participants, "a@mergington.edu".to_string())),
        };
        store.update("Art Club", &update);
        assert_eq!(
            store.find_one("Art Club").unwrap().participants,
            vec!["b@mergington.edu".to_string()]
        );
    }

    #[test]
    fn test_update_on_document_without_list_field() {
        let mut store = RecordStore::new("teachers");
        let teacher = Teacher {
            username: "mchen".to_string(),
            display_name: "Mr. Chen".to_string(),
            password: "hash".to_string(),
            role: Role::Teacher,
        };
        store.insert(teacher.clone()).unwrap();

        let result = store.update("mchen", &Update::push(ListField::Participants, "x"));
        assert_eq!(result.modified_count, 1);
        assert_eq!(store.find_one("mchen"), Some(&teacher));
    }

    #[test]
    fn test_count_honors_filter() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("A", &["Monday"])).unwrap();
        store.insert(activity("B", &["Tuesday"])).unwrap();

        assert_eq!(store.count(None), 2);
        assert_eq!(store.count(Some(&Filter::all().days_in(["Monday"]))), 1);
        assert_eq!(store.count(Some(&Filter::all())), 2);
    }

    #[test]
    fn test_distinct_days_sorted_and_unique() {
        let mut store = RecordStore::new("activities");
        store.insert(activity("A", &["Monday", "Friday"])).unwrap();
        store.insert(activity("B", &["Friday", "Wednesday"])).unwrap();

        let days: Vec<String> = store.distinct_days().into_iter().map(|d| d.value).collect();
        assert_eq!(days, vec!["Friday", "Monday", "Wednesday"]);
    }

    #[test]
    fn test_distinct_value_serializes_as_group_id() {
        let value = DistinctValue {
            value: "Monday".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"_id":"Monday"}"#
        );
    }
}
