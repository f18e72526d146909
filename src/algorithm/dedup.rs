use crate::io::configuration::DEFAULT_DEDUP_CAPACITY;
use crate::wardrobe::outfit::DedupKey;
use std::collections::{HashSet, VecDeque};

/// Bounded, insertion-ordered set of outfit keys
///
/// Once full, adding a new key evicts the oldest one. Eviction only ever lets
/// an old duplicate back in, it never hides a new key.
#[derive(Debug, Clone)]
pub struct DedupRegistry {
    order: VecDeque<DedupKey>,
    members: HashSet<DedupKey>,
    capacity: usize,

    /// Eviction and rejection counters
    pub stats: RegistryStats,
}

/// Registry activity counters
#[derive(Default, Debug, Clone, Copy)]
pub struct RegistryStats {
    /// Keys rejected because they were already present
    pub duplicates: usize,
    /// Keys dropped to stay within capacity
    pub evictions: usize,
}

impl Default for DedupRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_CAPACITY)
    }
}

impl DedupRegistry {
    /// Create an empty registry holding at most `capacity` keys (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            order: VecDeque::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
            capacity,
            stats: RegistryStats::default(),
        }
    }

    /// Whether the key is currently remembered
    pub fn contains(&self, key: &DedupKey) -> bool {
        self.members.contains(key)
    }

    /// Remember a key, returning `false` if it was already present
    pub fn add(&mut self, key: DedupKey) -> bool {
        if self.members.contains(&key) {
            self.stats.duplicates += 1;
            return false;
        }

        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
                self.stats.evictions += 1;
            }
        }

        self.members.insert(key.clone());
        self.order.push_back(key);
        true
    }

    /// Raise the capacity so at least `capacity` keys fit
    pub fn reserve_capacity(&mut self, capacity: usize) {
        self.capacity = self.capacity.max(capacity);
    }

    /// Maximum number of remembered keys
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of remembered keys
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is remembered
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remembered keys, oldest first
    pub fn keys(&self) -> impl Iterator<Item = &DedupKey> {
        self.order.iter()
    }

    /// Forget every key
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}
