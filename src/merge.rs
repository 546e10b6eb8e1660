use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::lines::Element;
use super::order::Order;

/// The live set of sorted sequences being merged, one per input file.
///
/// Sources are kept in insertion order, which is also the tie-break order
/// of the merge: among heads with equal keys, the source inserted first
/// wins. A source never holds an empty sequence; it is evicted as soon as
/// its last element is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet<E> {
    sources: Vec<(Arc<Path>, VecDeque<E>)>
}

impl<E> Default for WorkingSet<E> {
    fn default() -> Self {
        WorkingSet { sources: Vec::new() }
    }
}

impl<E: Element> WorkingSet<E> {
    pub fn new() -> WorkingSet<E> {
        WorkingSet::default()
    }

    /// Adds the sorted `elements` of `source`.
    ///
    /// Empty sequences are ignored. If `source` is already present, its
    /// sequence is replaced in place and keeps its position.
    pub fn insert(&mut self, source: PathBuf, elements: Vec<E>) {
        let existing = self.sources.iter().position(|(path, _)| **path == *source);
        if elements.is_empty() {
            if let Some(index) = existing {
                self.sources.remove(index);
            }
            return;
        }
        let elements = VecDeque::from(elements);
        match existing {
            Some(index) => self.sources[index].1 = elements,
            None => self.sources.push((Arc::from(source), elements))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Number of sources that still have elements.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Total number of elements left in all the sources.
    pub fn total_len(&self) -> usize {
        self.sources.iter().map(|(_, seq)| seq.len()).sum()
    }

    /// Takes the head of `source`, evicting the source if nothing is left in
    /// it. Returns `None` if `source` is not in the set.
    pub fn remove_front(&mut self, source: &Path) -> Option<E> {
        let index = self.sources.iter().position(|(path, _)| **path == *source)?;
        let (_, seq) = &mut self.sources[index];
        let head = seq.pop_front();
        if seq.is_empty() {
            self.sources.remove(index);
        }
        head
    }

    /// The source whose head must be emitted next. Among equal heads the
    /// earliest inserted source wins.
    pub fn next_source(&self, order: Order) -> Option<Arc<Path>> {
        let mut best: Option<(&Arc<Path>, &E)> = None;
        for (path, seq) in &self.sources {
            let head = match seq.front() {
                Some(head) => head,
                None => continue
            };
            let better = match best {
                Some((_, value)) => order.prefers(head, value),
                None => true
            };
            if better {
                best = Some((path, head));
            }
        }
        best.map(|(path, _)| Arc::clone(path))
    }
}

impl<E: Element> Extend<(PathBuf, Vec<E>)> for WorkingSet<E> {
    fn extend<I: IntoIterator<Item = (PathBuf, Vec<E>)>>(&mut self, iter: I) {
        for (source, elements) in iter {
            self.insert(source, elements);
        }
    }
}

/// Merges all the sequences of `working_set` into a single sequence sorted
/// in `order`, draining the set.
///
/// Each step scans the heads of all the remaining sources and takes the
/// best one, so the merge runs in `O(total * sources)`.
pub fn merge<E: Element>(mut working_set: WorkingSet<E>, order: Order) -> Vec<String> {
    let mut result = Vec::with_capacity(working_set.total_len());
    while let Some(source) = working_set.next_source(order) {
        if let Some(value) = working_set.remove_front(&source) {
            result.push(value.into_line());
        }
    }
    result
}
