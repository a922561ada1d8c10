use crate::utils::{Comparator, OrderedList};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// How records inside an entry are ordered during a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrder {
    /// Most-referenced document first; tied records sit in the order they
    /// reached that count.
    #[default]
    Ranked,
    /// Documents in the order they first produced the token. Each record is
    /// placed while its count is still zero and never moved, as in index
    /// files written by older releases.
    Legacy,
}

/// One document's occurrence count for a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: String,
    pub count: u32,
}

impl Record {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            count: 0,
        }
    }
}

/// Count-descending placement: a record goes before the first record with a
/// strictly smaller count, so equal counts keep arrival order.
fn by_count_desc(new: &Record, existing: &Record) -> Ordering {
    if new.count > existing.count {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Inverted-index bucket: every document that contains `token`
#[derive(Debug, Clone)]
pub struct Entry {
    token: String,
    records: OrderedList<Record>,
}

impl Entry {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            records: OrderedList::new(by_count_desc),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn records(&self) -> &OrderedList<Record> {
        &self.records
    }

    pub fn record(&self, path: &str) -> Option<&Record> {
        self.records.find(|r| r.path == path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.record(path).is_some()
    }

    /// Index of the record for `path`, creating it at count zero if needed.
    fn record_slot(&mut self, path: &str) -> usize {
        if let Some(index) = self.records.position(|r| r.path == path) {
            return index;
        }
        self.records.insert(Record::new(path))
    }

    /// Count one more occurrence of this token in `path`.
    pub fn increment(&mut self, path: &str, order: RecordOrder) {
        let index = self.record_slot(path);
        self.records[index].count += 1;
        if order == RecordOrder::Ranked {
            self.records.reinsert(index);
        }
    }

    /// Overwrite the count for `path` without moving the record.
    pub fn set_count(&mut self, path: &str, count: u32) {
        let index = self.record_slot(path);
        self.records[index].count = count;
    }
}

/// Token-ascending placement for entries of a freshly built index.
fn by_token_asc(new: &Entry, existing: &Entry) -> Ordering {
    existing.token.cmp(&new.token)
}

/// Inverted index: at most one entry per distinct token
#[derive(Debug, Clone)]
pub struct Index {
    entries: OrderedList<Entry>,
    record_order: RecordOrder,
}

impl Default for Index {
    fn default() -> Self {
        Self::new(RecordOrder::default())
    }
}

impl Index {
    /// Empty index whose entries are kept in ascending token order.
    pub fn new(record_order: RecordOrder) -> Self {
        Self::with_entry_order(by_token_asc, record_order)
    }

    /// Empty index whose entries stay in insertion order. Used when loading
    /// persisted text, which is never re-sorted.
    pub fn in_text_order() -> Self {
        Self::with_entry_order(|_, _| Ordering::Less, RecordOrder::Legacy)
    }

    fn with_entry_order(compare: Comparator<Entry>, record_order: RecordOrder) -> Self {
        Self {
            entries: OrderedList::new(compare),
            record_order,
        }
    }

    pub fn record_order(&self) -> RecordOrder {
        self.record_order
    }

    pub fn entries(&self) -> &OrderedList<Entry> {
        &self.entries
    }

    pub fn entry(&self, token: &str) -> Option<&Entry> {
        self.entries.find(|e| e.token == token)
    }

    /// Entry for `token`, created empty if the index has none yet.
    pub fn entry_or_insert(&mut self, token: &str) -> &mut Entry {
        let index = match self.entries.position(|e| e.token == token) {
            Some(index) => index,
            None => self.entries.insert(Entry::new(token)),
        };
        &mut self.entries[index]
    }

    /// Count one occurrence of `token` in the document at `path`.
    pub fn add_occurrence(&mut self, token: &str, path: &str) {
        let order = self.record_order;
        self.entry_or_insert(token).increment(path, order);
    }

    /// Number of entries (distinct tokens)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of records across all entries
    pub fn record_count(&self) -> usize {
        self.entries.iter().map(|e| e.records.len()).sum()
    }
}
