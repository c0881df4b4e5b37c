//! Binary min-heap ordered by an explicit comparator.
//!
//! The ordering rule is a value handed to the queue rather than an `Ord`
//! implementation on the element type, so the same queue serves any
//! ordering and the rule itself can be tested on its own.
use crate::error::SolveError;
use std::cmp::Ordering;

/// A total order over `T`, supplied to [`MinPq`].
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

struct Entry<T> {
    seq: u64,
    item: T,
}

/// Min-priority queue on a binary heap.
///
/// Items the comparator considers equal come out in insertion order, which
/// keeps extraction deterministic.
///
/// # Examples
/// ```
/// use npuzzle_solver::queue::MinPq;
/// let mut pq = MinPq::new(|a: &u32, b: &u32| a.cmp(b));
/// pq.insert(3);
/// pq.insert(1);
/// pq.insert(2);
/// assert_eq!(pq.extract_min().unwrap(), 1);
/// assert_eq!(pq.len(), 2);
/// ```
pub struct MinPq<T, C> {
    heap: Vec<Entry<T>>,
    comparator: C,
    next_seq: u64,
}

impl<T, C: Comparator<T>> MinPq<T, C> {
    pub fn new(comparator: C) -> Self {
        MinPq {
            heap: Vec::new(),
            comparator,
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first().map(|entry| &entry.item)
    }

    /// Adds an item in O(log n).
    pub fn insert(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, item });
        self.swim(self.heap.len() - 1);
    }

    /// Removes and returns the smallest item in O(log n).
    ///
    /// # Errors
    /// `SolveError::EmptyQueue` if there is nothing to remove.
    pub fn extract_min(&mut self) -> Result<T, SolveError> {
        if self.heap.is_empty() {
            return Err(SolveError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop().ok_or(SolveError::EmptyQueue)?;
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min.item)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.heap[i], &self.heap[j]);
        match self.comparator.compare(&a.item, &b.item) {
            Ordering::Equal => a.seq < b.seq,
            ord => ord == Ordering::Less,
        }
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.less(k, parent) {
                break;
            }
            self.heap.swap(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * k + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, k) {
                break;
            }
            self.heap.swap(k, child);
            k = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_extract_in_ascending_order() {
        let mut rng = SmallRng::seed_from_u64(514514);
        let mut pq = MinPq::new(|a: &u32, b: &u32| a.cmp(b));
        let mut values: Vec<u32> = (0..200).map(|_| rng.gen_range(0..50)).collect();
        for &v in &values {
            pq.insert(v);
        }
        assert_eq!(pq.len(), values.len());

        values.sort_unstable();
        let mut drained = Vec::new();
        while !pq.is_empty() {
            drained.push(pq.extract_min().unwrap());
        }
        assert_eq!(drained, values);
    }

    #[test]
    fn test_ties_come_out_in_insertion_order() {
        // Compare only on the key; the label records insertion order.
        let mut pq = MinPq::new(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
        for item in [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e'), (1, 'f')] {
            pq.insert(item);
        }
        let order: Vec<char> = std::iter::from_fn(|| pq.extract_min().ok())
            .map(|(_, label)| label)
            .collect();
        assert_eq!(order, vec!['b', 'd', 'f', 'a', 'c', 'e']);
    }

    #[test]
    fn test_peek_and_interleaved_operations() {
        let mut pq = MinPq::new(|a: &i32, b: &i32| a.cmp(b));
        assert!(pq.peek().is_none());
        pq.insert(5);
        pq.insert(3);
        assert_eq!(pq.peek(), Some(&3));
        assert_eq!(pq.extract_min().unwrap(), 3);
        pq.insert(4);
        pq.insert(-1);
        assert_eq!(pq.extract_min().unwrap(), -1);
        assert_eq!(pq.extract_min().unwrap(), 4);
        assert_eq!(pq.extract_min().unwrap(), 5);
        assert!(pq.is_empty());
    }

    #[test]
    fn test_extract_from_empty_queue() {
        let mut pq = MinPq::new(|a: &u8, b: &u8| a.cmp(b));
        assert!(matches!(pq.extract_min(), Err(SolveError::EmptyQueue)));
        pq.insert(1);
        pq.extract_min().unwrap();
        assert!(matches!(pq.extract_min(), Err(SolveError::EmptyQueue)));
    }
}
