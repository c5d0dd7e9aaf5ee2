//! Rolling sample history for one metric.
//!
//! Capacity equals the display width, so the graph has exactly one sample per
//! pixel column. Appending to a full history evicts the oldest sample.

use std::collections::VecDeque;

/// Fixed-capacity ring of recent samples, oldest first.
#[derive(Clone, Debug)]
pub struct MetricHistory {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl MetricHistory {
    /// Create an empty history.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a history already full of zero samples.
    ///
    /// The dashboard starts this way so every graph spans the full width from
    /// the first tick.
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            samples: std::iter::repeat_n(0.0, capacity).collect(),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when full.
    pub fn push(
        &mut self,
        value: f32,
    ) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub const fn capacity(&self) -> usize { self.capacity }

    /// Most recent sample.
    pub fn latest(&self) -> Option<f32> { self.samples.back().copied() }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ { self.samples.iter().copied() }
}

// =============================================================================
// Unit Tests
// =============================================================================
