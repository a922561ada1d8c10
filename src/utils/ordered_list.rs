//! Comparator-driven ordered sequence.
//!
//! Every ordered structure in the crate (index entries, entry records, split
//! lines, query words, result sets) is an [`OrderedList`]. The list does not
//! sort in the usual sense: the comparator decides, pairwise from the front,
//! whether a new element goes *before* an existing one.
//!
//! `insert(e)` evaluates `cmp(e, existing)` for each element in turn:
//!
//! - `Equal` or `Greater`: `e` is placed immediately before `existing`
//! - `Less`: keep scanning
//!
//! If the scan reaches the end, `e` is appended. One primitive therefore
//! covers several policies purely through the comparator:
//!
//! | Policy            | Comparator                                   | Result                         |
//! |-------------------|----------------------------------------------|--------------------------------|
//! | key ascending     | `existing.key.cmp(&new.key)`                 | ascending keys                 |
//! | count descending  | `Greater` iff `new.count > existing.count`   | descending, ties keep arrival  |
//! | append            | always `Less` ([`OrderedList::appending`])   | arrival order                  |
//! | equality grouping | `Equal` iff `new == existing` ([`OrderedList::grouping`]) | duplicates pulled forward |

use std::cmp::Ordering;

/// Pairwise placement function: `cmp(new, existing)`.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Ordered sequence whose order is defined solely by its comparator.
#[derive(Clone)]
pub struct OrderedList<T> {
    items: Vec<T>,
    compare: Comparator<T>,
}

impl<T> OrderedList<T> {
    /// Create an empty list placing elements with `compare`.
    pub fn new(compare: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// List that always appends, preserving arrival order.
    pub fn appending() -> Self {
        Self::new(|_, _| Ordering::Less)
    }

    /// Insert `value` before the first element it compares `Equal` or
    /// `Greater` to, or at the tail if there is none. Returns where it landed.
    pub fn insert(&mut self, value: T) -> usize {
        let at = self.slot_for(&value);
        self.items.insert(at, value);
        at
    }

    /// Whether some element compares `Equal` to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items
            .iter()
            .any(|existing| (self.compare)(existing, value) == Ordering::Equal)
    }

    /// Remove the first element comparing `Equal` to `value`.
    ///
    /// Returns `false` when nothing matched, including on an empty list.
    pub fn remove(&mut self, value: &T) -> bool {
        let found = self
            .items
            .iter()
            .position(|existing| (self.compare)(existing, value) == Ordering::Equal);
        match found {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forward cursor over the current order.
    ///
    /// The cursor borrows the list, so the list cannot be mutated while a
    /// cursor is alive. Each call returns a fresh, independent cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    /// First element matching `predicate`.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable access to one element.
    ///
    /// Changing the fields the comparator reads does not move the element;
    /// call [`OrderedList::reinsert`] afterwards to restore its placement.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Take the element at `index` out and insert it again under the
    /// comparator. Returns its new index, or `None` if `index` is out of
    /// range.
    pub fn reinsert(&mut self, index: usize) -> Option<usize> {
        if index >= self.items.len() {
            return None;
        }
        let value = self.items.remove(index);
        let at = self.slot_for(&value);
        self.items.insert(at, value);
        Some(at)
    }

    fn slot_for(&self, value: &T) -> usize {
        self.items
            .iter()
            .position(|existing| (self.compare)(value, existing) != Ordering::Less)
            .unwrap_or(self.items.len())
    }
}

impl<T: PartialEq> OrderedList<T> {
    /// List that pulls a new element forward to sit just ahead of its first
    /// equal peer and otherwise appends. It regroups duplicates; it does not
    /// sort.
    pub fn grouping() -> Self {
        Self::new(|new, existing| {
            if new == existing {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        })
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> std::ops::Index<usize> for OrderedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for OrderedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &OrderedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn ascending(new: &&str, existing: &&str) -> Ordering {
        existing.cmp(new)
    }

    fn descending_stable(new: &(char, u32), existing: &(char, u32)) -> Ordering {
        if new.1 > existing.1 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    #[test]
    fn test_ascending_policy() {
        let mut list = OrderedList::new(ascending);
        for word in ["pear", "apple", "fig", "apple", "zest"] {
            list.insert(word);
        }
        assert_eq!(collect(&list), vec!["apple", "apple", "fig", "pear", "zest"]);
    }

    #[test]
    fn test_descending_policy_keeps_ties_in_arrival_order() {
        let mut list = OrderedList::new(descending_stable);
        for item in [('a', 1), ('b', 3), ('c', 1), ('d', 3), ('e', 2)] {
            list.insert(item);
        }
        assert_eq!(
            collect(&list),
            vec![('b', 3), ('d', 3), ('e', 2), ('a', 1), ('c', 1)]
        );
    }

    #[test]
    fn test_appending_policy() {
        let mut list = OrderedList::appending();
        for n in [3, 1, 2, 1] {
            list.insert(n);
        }
        assert_eq!(collect(&list), vec![3, 1, 2, 1]);
    }

    #[test]
    fn test_grouping_policy_regroups_without_sorting() {
        let mut list = OrderedList::grouping();
        for word in ["so", "fox", "dog", "fox", "cat"] {
            list.insert(word);
        }
        assert_eq!(collect(&list), vec!["so", "fox", "fox", "dog", "cat"]);
    }

    #[test]
    fn test_contains() {
        let mut list = OrderedList::grouping();
        list.insert("a");
        list.insert("b");
        assert!(list.contains(&"b"));
        assert!(!list.contains(&"c"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut empty: OrderedList<&str> = OrderedList::grouping();
        assert!(!empty.remove(&"x"));
        assert!(empty.is_empty());

        let mut list = OrderedList::grouping();
        list.insert("a");
        list.insert("b");
        assert!(!list.remove(&"x"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut list = OrderedList::grouping();
        for word in ["a", "b", "a"] {
            list.insert(word);
        }
        assert!(list.remove(&"a"));
        assert_eq!(collect(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_independent_cursors() {
        let mut list = OrderedList::appending();
        list.insert(1);
        list.insert(2);
        let mut first = list.iter();
        assert_eq!(first.next(), Some(&1));
        let mut second = list.iter();
        assert_eq!(second.next(), Some(&1));
        assert_eq!(first.next(), Some(&2));
        assert_eq!(first.next(), None);
        assert_eq!(second.next(), Some(&2));
    }

    #[test]
    fn test_reinsert_after_mutation() {
        let mut list = OrderedList::new(descending_stable);
        for item in [('a', 2), ('b', 1), ('c', 1)] {
            list.insert(item);
        }
        if let Some(item) = list.get_mut(2) {
            item.1 = 2;
        }
        assert_eq!(list.reinsert(2), Some(1));
        assert_eq!(collect(&list), vec![('a', 2), ('c', 2), ('b', 1)]);
        assert_eq!(list.reinsert(10), None);
    }
}
