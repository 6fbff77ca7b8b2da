use std::cmp::Ordering;

/**
 * A binary min-heap ordered by a caller-supplied comparison function.
 *
 * The backing vector is read as a complete binary tree: the children of
 * index i live at 2i + 1 and 2i + 2, its parent at (i - 1) / 2.  Every
 * parent compares less-than-or-equal to its children, so index 0 is a
 * minimum under `compare`.  Equal elements have no guaranteed order.
 *
 * Max-heap behavior comes from inverting the comparator, not a mode.
 */
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    elements: Vec<T>,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        PriorityQueue {
            elements: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(capacity: usize, compare: C) -> Self {
        PriorityQueue {
            elements: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Build a heap from existing elements in O(n): sift down every
    /// internal node, deepest first.
    pub fn from_vec(elements: Vec<T>, compare: C) -> Self {
        let mut queue = PriorityQueue { elements, compare };
        let len = queue.elements.len();
        if len > 1 {
            for index in (0..len / 2).rev() {
                queue.sift_down(index);
            }
        }
        queue
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Visits elements in heap order, not sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    pub fn push(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        // swap_remove returns the original root; the former last element
        // lands at index 0 and gets sifted back down.
        let minimum = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(minimum)
    }

    /// Drops all elements; the comparator and capacity are retained.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.elements[parent], &self.elements[index]) != Ordering::Greater {
                break;
            }
            self.elements.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len
                && (self.compare)(&self.elements[right], &self.elements[left]) == Ordering::Less
            {
                smallest = right;
            }
            if (self.compare)(&self.elements[smallest], &self.elements[index]) != Ordering::Less {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}
