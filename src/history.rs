//! Rolling window of recent object-temperature samples.
//!
//! Fixed capacity, newest first. Slots that have not been written since the
//! last [`SampleHistory::clear`] are empty and take no part in the
//! tolerance check, so a fresh measurement only compares samples from the
//! current presence run.

use crate::config::HISTORY_LEN;

/// Ring of the last [`HISTORY_LEN`] object temperatures (°C).
#[derive(Clone, Debug)]
pub struct SampleHistory {
    slots: [Option<f32>; HISTORY_LEN],
    head: usize, // Slot holding the newest sample
}

impl SampleHistory {
    /// An empty window.
    pub const fn new() -> Self {
        Self {
            slots: [None; HISTORY_LEN],
            head: 0,
        }
    }

    /// Forget every sample.
    pub fn clear(&mut self) {
        self.slots = [None; HISTORY_LEN];
        self.head = 0;
    }

    /// Push a sample in front, dropping the oldest.
    pub fn push(&mut self, value: f32) {
        self.head = (self.head + HISTORY_LEN - 1) % HISTORY_LEN;
        self.slots[self.head] = Some(value);
    }

    /// Most recent sample, if any.
    #[inline]
    pub fn newest(&self) -> Option<f32> {
        self.slots[self.head]
    }

    /// Sample `age` pushes ago (0 = newest). `None` when that slot is empty
    /// or past capacity.
    pub fn get(&self, age: usize) -> Option<f32> {
        if age < HISTORY_LEN {
            self.slots[(self.head + age) % HISTORY_LEN]
        } else {
            None
        }
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.newest().is_none()
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        HISTORY_LEN
    }

    /// Iterate stored samples from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..HISTORY_LEN).map_while(move |age| self.get(age))
    }

    /// True when every older stored sample is strictly within `tolerance`
    /// of the newest one. One outlier anywhere in the window fails the
    /// whole check; an empty window never settles.
    pub fn is_settled(&self, tolerance: f32) -> bool {
        let Some(newest) = self.newest() else {
            return false;
        };
        self.iter()
            .skip(1)
            .all(|older| (newest - older).abs() < tolerance)
    }
}

impl Default for SampleHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(values: &[f32]) -> SampleHistory {
        let mut h = SampleHistory::new();
        for &v in values {
            h.push(v);
        }
        h
    }

    #[test]
    fn starts_empty() {
        let h = SampleHistory::new();
        assert_eq!(h.capacity(), 4);
        assert_eq!(h.len(), 0);
        assert!(h.is_empty());
        assert_eq!(h.newest(), None);
        assert!(!h.is_settled(1.0));
    }

    #[test]
    fn newest_first_ordering() {
        let h = window(&[1.0, 2.0, 3.0]);
        let mut out = [0.0f32; 4];
        for (slot, v) in out.iter_mut().zip(h.iter()) {
            *slot = v;
        }
        assert_eq!(out, [3.0, 2.0, 1.0, 0.0]);
        assert_eq!(h.len(), 3);
        assert_eq!(h.newest(), Some(3.0));
        assert_eq!(h.get(3), None);
    }

    #[test]
    fn push_evicts_oldest() {
        let h = window(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(h.get(0), Some(5.0));
        assert_eq!(h.get(3), Some(2.0));
        assert_eq!(h.get(4), None);
        assert_eq!(h.len(), 4);
    }

    #[test]
    fn settled_requires_every_sample_within_tolerance() {
        assert!(window(&[36.0, 36.2, 36.4, 36.1]).is_settled(1.0));
        // Outlier in the oldest slot still disqualifies the window.
        assert!(!window(&[34.0, 36.2, 36.4, 36.1]).is_settled(1.0));
        // Outlier in the middle.
        assert!(!window(&[36.0, 38.0, 36.4, 36.1]).is_settled(1.0));
    }

    #[test]
    fn settled_is_strict() {
        assert!(!window(&[36.0, 36.0, 36.0, 37.0]).is_settled(1.0));
        assert!(window(&[36.0, 36.0, 36.0, 36.5]).is_settled(1.0));
    }

    #[test]
    fn partial_window_compares_only_stored_samples() {
        assert!(window(&[36.0]).is_settled(1.0));
        assert!(window(&[36.0, 36.3]).is_settled(1.0));
        assert!(!window(&[34.0, 36.3]).is_settled(1.0));
    }

    #[test]
    fn clear_empties_the_window() {
        let mut h = window(&[20.0, 20.0, 20.0, 20.0]);
        h.clear();
        assert!(h.is_empty());
        h.push(33.0);
        assert_eq!(h.len(), 1);
        assert!(h.is_settled(1.0));
    }
}
