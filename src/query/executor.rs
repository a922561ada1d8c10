use crate::index::types::{Entry, Index};
use crate::query::parser::{Query, QueryMode};
use crate::utils::OrderedList;
use tracing::debug;

/// Answers AND/OR queries against a loaded index.
///
/// Results are document paths, deduplicated, in the order they were first
/// encountered. A term with no entry is never an error: it contributes
/// nothing to an OR query and empties an AND query.
pub struct QueryExecutor<'a> {
    index: &'a Index,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self { index }
    }

    /// Execute a query and return matching document paths
    pub fn execute(&self, query: &Query) -> Vec<String> {
        let results = match query.mode {
            QueryMode::Or => self.search_or(&query.terms),
            QueryMode::And => self.search_and(&query.terms),
        };

        debug!(
            mode = ?query.mode,
            terms = ?query.terms,
            results = results.len(),
            "executed query"
        );

        results.into_iter().collect()
    }

    /// Paths in any term's entry: query-term order, then record order.
    fn search_or(&self, terms: &[String]) -> OrderedList<String> {
        let mut results = OrderedList::grouping();

        for entry in terms.iter().filter_map(|t| self.index.entry(t)) {
            collect_paths(entry, &mut results, |_| true);
        }

        results
    }

    /// Paths present in every term's entry: index entry order, then record
    /// order.
    fn search_and(&self, terms: &[String]) -> OrderedList<String> {
        let mut results = OrderedList::grouping();

        for entry in self.index.entries() {
            if !terms.iter().any(|t| t == entry.token()) {
                continue;
            }
            collect_paths(entry, &mut results, |path| self.in_every_entry(terms, path));
        }

        results
    }

    fn in_every_entry(&self, terms: &[String], path: &str) -> bool {
        terms.iter().all(|term| {
            self.index
                .entry(term)
                .is_some_and(|entry| entry.contains_path(path))
        })
    }
}

fn collect_paths(entry: &Entry, results: &mut OrderedList<String>, mut accept: impl FnMut(&str) -> bool) {
    for record in entry.records() {
        if results.contains(&record.path) || !accept(&record.path) {
            continue;
        }
        results.insert(record.path.clone());
    }
}
