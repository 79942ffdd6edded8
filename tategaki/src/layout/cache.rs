// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small least-recently-used layout cache.
//!
//! Keys combine the owning element's revision counter with the layout
//! inputs, so a stale hit is impossible: every content or style mutation
//! goes through a setter that bumps the revision, and a bumped revision can
//! never collide with an old key. Lookup is a linear scan, which is the
//! right trade for the handful of entries one element ever holds.

use super::LayoutMode;

/// Cache key for one computed layout.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct LayoutKey {
    pub revision: u64,
    pub mode: LayoutMode,
    /// `f32::to_bits` of the available width, for `Eq`.
    pub avail_width: u32,
    /// `f32::to_bits` of the available height, for `Eq`.
    pub avail_height: u32,
}

impl LayoutKey {
    pub(crate) fn new(revision: u64, mode: LayoutMode, avail_width: f32, avail_height: f32) -> Self {
        Self {
            revision,
            mode,
            avail_width: avail_width.to_bits(),
            avail_height: avail_height.to_bits(),
        }
    }
}

struct Entry<T> {
    epoch: u64,
    key: LayoutKey,
    data: T,
}

pub(crate) struct LruCache<T> {
    entries: Vec<Entry<T>>,
    epoch: u64,
    max_entries: usize,
}

impl<T> LruCache<T> {
    pub(crate) fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
            max_entries,
        }
    }

    /// The entry for `key`, created with `make_data` when absent. Touching
    /// an entry refreshes its epoch; creation evicts the oldest entry once
    /// the cache is full.
    pub(crate) fn entry(&mut self, key: LayoutKey, make_data: impl FnOnce() -> T) -> &T {
        self.epoch += 1;
        let epoch = self.epoch;

        let mut hit = None;
        let mut oldest_epoch = epoch;
        let mut oldest_index = 0;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.key == key {
                hit = Some(i);
                break;
            }
            if entry.epoch < oldest_epoch {
                oldest_epoch = entry.epoch;
                oldest_index = i;
            }
        }
        if let Some(i) = hit {
            let entry = &mut self.entries[i];
            entry.epoch = epoch;
            return &entry.data;
        }

        if self.entries.len() < self.max_entries {
            oldest_index = self.entries.len();
            self.entries.push(Entry {
                epoch,
                key,
                data: make_data(),
            });
        } else {
            let entry = &mut self.entries[oldest_index];
            entry.epoch = epoch;
            entry.key = key;
            entry.data = make_data();
        }
        &self.entries[oldest_index].data
    }

    /// Drop every entry. Used when a setter invalidates wholesale (the
    /// revision bump already protects correctness; this frees memory).
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> core::fmt::Debug for LruCache<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.entries.len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(revision: u64) -> LayoutKey {
        LayoutKey::new(revision, LayoutMode::Vertical, 100.0, 100.0)
    }

    #[test]
    fn hit_does_not_recompute() {
        let mut cache = LruCache::new(3);
        assert_eq!(*cache.entry(key(1), || 42), 42);
        assert_eq!(*cache.entry(key(1), || panic!("cached")), 42);
    }

    #[test]
    fn distinct_keys_get_distinct_entries() {
        let mut cache = LruCache::new(3);
        cache.entry(key(1), || 1);
        cache.entry(key(2), || 2);
        let different_mode = LayoutKey::new(1, LayoutMode::Horizontal, 100.0, 100.0);
        assert_eq!(*cache.entry(different_mode, || 3), 3);
        assert_eq!(cache.entries.len(), 3);
    }

    #[test]
    fn evicts_the_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.entry(key(1), || 1);
        cache.entry(key(2), || 2);
        // Touch 1 so 2 becomes the eviction candidate.
        cache.entry(key(1), || panic!("cached"));
        cache.entry(key(3), || 3);

        cache.entry(key(1), || panic!("1 should survive"));
        let mut recomputed = false;
        cache.entry(key(2), || {
            recomputed = true;
            20
        });
        assert!(recomputed);
    }
}
