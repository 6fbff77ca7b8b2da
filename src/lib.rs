mod min_heap;
mod priority_queue;

pub use min_heap::MinHeap;
pub use priority_queue::PriorityQueue;
