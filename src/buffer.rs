use heapless::Deque;

use crate::config::MAX_WINDOW_SIZE;

/// Capacity of the rolling buffer for the largest supported window.
pub const MAX_BUFFER_LEN: usize = 2 * MAX_WINDOW_SIZE + 1;

/// Fixed-length window of clamped voltage readings, newest first.
///
/// Once filled the length never changes: every push at the front evicts one
/// sample from the back.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    samples: Deque<f64, MAX_BUFFER_LEN>,
}

impl RollingBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Replace the contents with `len` copies of `value`.
    ///
    /// `len` is capped at `MAX_BUFFER_LEN`.
    pub fn fill(&mut self, value: f64, len: usize) {
        self.samples.clear();
        for _ in 0..len.min(MAX_BUFFER_LEN) {
            let _ = self.samples.push_back(value);
        }
    }

    /// Insert `value` at the front and return the evicted oldest sample.
    ///
    /// On an empty buffer nothing is evicted and the buffer grows to one sample.
    pub fn push_front(&mut self, value: f64) -> Option<f64> {
        let evicted = self.samples.pop_back();
        let _ = self.samples.push_front(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn front(&self) -> Option<f64> {
        self.samples.front().copied()
    }

    pub fn back(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.samples.iter().nth(index).copied()
    }

    /// Iterate newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }

    /// Copy the samples, newest first, into a contiguous slice for filtering.
    pub fn copy_to(&self, out: &mut heapless::Vec<f64, MAX_BUFFER_LEN>) {
        out.clear();
        let (head, tail) = self.samples.as_slices();
        let _ = out.extend_from_slice(head);
        let _ = out.extend_from_slice(tail);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for RollingBuffer {
    fn default() -> Self {
        Self::new()
    }
}
