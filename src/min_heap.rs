use crate::PriorityQueue;
use std::cmp::Ordering;

/// Min-heap over the element type's natural order.  Shorthand for a
/// `PriorityQueue` constructed with `Ord::cmp`.
pub struct MinHeap<T> {
    queue: PriorityQueue<T, fn(&T, &T) -> Ordering>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap {
            queue: PriorityQueue::new(T::cmp),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            queue: PriorityQueue::with_capacity(capacity, T::cmp),
        }
    }

    pub fn push(&mut self, value: T) {
        self.queue.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.queue.peek()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        MinHeap {
            queue: PriorityQueue::from_vec(elements, T::cmp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_heap_basic() {
        let mut heap = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);

        heap.push(4);
        heap.push(1);
        heap.push(3);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(4));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_min_heap_from_vec() {
        let mut heap = MinHeap::from(vec!["pear", "apple", "quince"]);
        assert_eq!(heap.pop(), Some("apple"));
        assert_eq!(heap.pop(), Some("pear"));
        assert_eq!(heap.pop(), Some("quince"));
    }

    #[test]
    fn test_min_heap_clear() {
        let mut heap = MinHeap::with_capacity(4);
        heap.push(2);
        heap.push(9);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
    }
}
