//! Fixed-capacity sample history

use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_HISTORY_CAPACITY;

/// A single `(x, y)` trace sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ring buffer keeping the most recent `capacity` values
///
/// Storage grows until it reaches capacity. After that every push overwrites
/// the slot under the write cursor, which then holds the oldest value, and
/// advances the cursor. Iteration therefore starts at the cursor once the
/// buffer has wrapped.
///
/// # Example
///
/// ```
/// use pendulum_sim::RingBuffer;
///
/// let mut buffer = RingBuffer::new(3);
/// for i in 0..5 {
///     buffer.push(i);
/// }
///
/// assert_eq!(buffer.len(), 3);
/// assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    data: Vec<T>,
    capacity: usize,
    /// Write cursor; only moves once the buffer is full
    offset: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Ring buffer capacity must be positive");

        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            offset: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Index of the oldest value in [`as_slice`](Self::as_slice)
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Raw storage order. Use together with [`offset`](Self::offset), or use
    /// [`iter`](Self::iter) for chronological order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn push(&mut self, value: T) {
        if self.data.len() < self.capacity {
            self.data.push(value);
        } else {
            self.data[self.offset] = value;
            self.offset = (self.offset + 1) % self.capacity;
        }
    }

    /// Drop all values and rewind the cursor
    pub fn clear(&mut self) {
        self.data.clear();
        self.offset = 0;
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (newer, older) = self.data.split_at(self.offset);
        older.iter().chain(newer.iter())
    }

    /// Visit every value oldest to newest
    pub fn for_each_in_order<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// Most recently pushed value
    pub fn last(&self) -> Option<&T> {
        if self.is_full() {
            let idx = (self.offset + self.capacity - 1) % self.capacity;
            self.data.get(idx)
        } else {
            self.data.last()
        }
    }

    /// Oldest value still held
    pub fn first(&self) -> Option<&T> {
        self.data.get(self.offset)
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Chronological copy of the contents
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl RingBuffer<Sample> {
    /// Record an `(x, y)` sample
    pub fn append(&mut self, x: f64, y: f64) {
        self.push(Sample::new(x, y));
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn DoubleEndedIterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
