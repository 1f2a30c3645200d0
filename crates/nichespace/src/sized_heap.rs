//! A max-heap that keeps at most `k` of the smallest items pushed into it.

use std::collections::BinaryHeap;

/// A bounded max-heap.
///
/// The largest retained item is at the top, so a new item only displaces it
/// when the new item is smaller. This keeps the `k` nearest neighbors of a
/// query while scanning its distances.
#[derive(Debug)]
pub struct SizedHeap<T: PartialOrd> {
    /// The retained items.
    heap: BinaryHeap<MaxItem<T>>,
    /// The maximum number of retained items.
    k: usize,
}

impl<T: PartialOrd> SizedHeap<T> {
    /// Creates an empty heap that retains at most `k` items.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(k.saturating_add(1)),
            k,
        }
    }

    /// The maximum number of retained items.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Offers an item, evicting the largest if the heap is over capacity.
    pub fn push(&mut self, item: T) {
        if self.heap.len() < self.k {
            self.heap.push(MaxItem(item));
        } else if self.heap.peek().is_some_and(|top| item < top.0) {
            self.heap.pop();
            self.heap.push(MaxItem(item));
        }
    }

    /// The largest retained item.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|MaxItem(x)| x)
    }

    /// The number of retained items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no item is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `k` items are retained.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.k
    }

    /// Consumes the heap, returning the retained items in ascending order.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec().into_iter().map(|MaxItem(x)| x).collect()
    }
}

impl<T: PartialOrd> Extend<T> for SizedHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.push(item);
        }
    }
}

/// Gives a total order to a `PartialOrd` type. Incomparable items, e.g. NaN
/// distances, sort as the larger one.
#[derive(Debug)]
struct MaxItem<T: PartialOrd>(T);

impl<T: PartialOrd> PartialEq for MaxItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<T: PartialOrd> Eq for MaxItem<T> {}

impl<T: PartialOrd> PartialOrd for MaxItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for MaxItem<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(core::cmp::Ordering::Greater)
    }
}
