//! Fixed-capacity trail history
//!
//! Each point records its recent screen positions in a ring buffer that is
//! allocated once with the point and never grows.

use glam::Vec2;

use crate::consts::TRAIL_CAPACITY;

/// Ring buffer of recent screen positions, oldest-to-newest by logical index
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    slots: [Vec2; TRAIL_CAPACITY],
    /// Next slot to write
    head: usize,
    count: usize,
    /// Configured trail length (<= TRAIL_CAPACITY)
    max_len: usize,
}

impl TrailBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            slots: [Vec2::ZERO; TRAIL_CAPACITY],
            head: 0,
            count: 0,
            max_len: max_len.min(TRAIL_CAPACITY),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        TRAIL_CAPACITY
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Change the configured length; shrinking drops the oldest samples
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.min(TRAIL_CAPACITY);
        self.count = self.count.min(self.max_len);
    }

    /// Record a sample, overwriting the oldest once full
    pub fn push(&mut self, pos: Vec2) {
        self.slots[self.head] = pos;
        self.head = (self.head + 1) % TRAIL_CAPACITY;
        self.count = (self.count + 1).min(self.max_len);
    }

    /// Sample `i` in oldest-to-newest order
    #[inline]
    pub fn get(&self, i: usize) -> Option<Vec2> {
        if i >= self.count {
            return None;
        }
        let oldest = (self.head + TRAIL_CAPACITY - self.count) % TRAIL_CAPACITY;
        Some(self.slots[(oldest + i) % TRAIL_CAPACITY])
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<Vec2> {
        self.count.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Samples oldest-to-newest
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    /// Forget all samples, keeping storage
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(0)
    }
}
