//! Array-backed binary min-heap over window loads.
//!
//! Ordered by the composite key `(load, window)`, so among equally loaded
//! windows the lowest index is always on top. The tie-break lives in the
//! key itself rather than in heap insertion order.
//!
//! # Complexity
//! `push` and `pop_min` are O(log m) for m windows.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

/// A window together with its current cumulative load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLoad {
    /// Cumulative assigned duration.
    pub load: u64,
    /// Zero-based window index.
    pub window: usize,
}

impl WindowLoad {
    /// Creates an entry.
    pub fn new(window: usize, load: u64) -> Self {
        Self { load, window }
    }

    #[inline]
    fn key(&self) -> (u64, usize) {
        (self.load, self.window)
    }
}

/// Binary min-heap of [`WindowLoad`] entries.
#[derive(Debug, Clone, Default)]
pub struct LoadHeap {
    entries: Vec<WindowLoad>,
}

impl LoadHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heap holding windows `0..count`, all at load zero.
    ///
    /// Entries in ascending index order already satisfy the heap property.
    pub fn with_windows(count: usize) -> Self {
        Self {
            entries: (0..count).map(|w| WindowLoad::new(w, 0)).collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The least-loaded window without removing it.
    pub fn peek(&self) -> Option<&WindowLoad> {
        self.entries.first()
    }

    /// Inserts an entry.
    pub fn push(&mut self, entry: WindowLoad) {
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the least-loaded window.
    pub fn pop_min(&mut self) -> Option<WindowLoad> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.entries[pos].key() >= self.entries[parent].key() {
                break;
            }
            self.entries.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.entries[right].key() < self.entries[left].key() {
                right
            } else {
                left
            };
            if self.entries[pos].key() <= self.entries[smallest].key() {
                break;
            }
            self.entries.swap(pos, smallest);
            pos = smallest;
        }
    }
}
