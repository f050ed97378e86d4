//! Count-min frequency sketch with periodic aging
//!
//! Each shard owns one sketch, so increments never contend across shards.
//! Counters are 4 bits wide and packed sixteen to a `u64` word. A key maps to
//! one counter in each of four rows; every row owns a fixed quarter of each
//! word, so rows never share a counter. The estimate is the minimum over the
//! four rows, which can overestimate through collisions but never
//! underestimates until an aging pass halves the table.
//!
//! ```text
//!   word (u64) = 16 nibbles
//!   ┌──────row 0──────┬──────row 1──────┬──────row 2──────┬──────row 3──────┐
//!   │ n0  n1  n2  n3  │ n4  n5  n6  n7  │ n8  n9  n10 n11 │ n12 n13 n14 n15 │
//!   └─────────────────┴─────────────────┴─────────────────┴─────────────────┘
//! ```
//!
//! After `sample_size` (ten times the capacity) successful increments, every
//! counter is halved so the sketch tracks recent rather than lifetime
//! popularity.

use xxhash_rust::xxh3::xxh3_64;

/// Largest value a 4-bit counter holds
pub const MAX_FREQUENCY: u8 = 15;

const ROWS: usize = 4;
const SAMPLE_MULTIPLIER: usize = 10;
const MIN_WORDS: usize = 8;
const RESET_MASK: u64 = 0x7777_7777_7777_7777;
const ROW_SEEDS: [u64; ROWS] = [
    0xc3a5_c85c_97cb_3127,
    0xb492_b66f_be98_f273,
    0x9ae1_6a3b_2f90_404f,
    0xcbf2_9ce4_8422_2325,
];

/// Hash a key into the fingerprint the sketch and eviction lists use
#[inline]
pub fn fingerprint(key: &str) -> u64 {
    xxh3_64(key.as_bytes())
}

/// Approximate per-key access counter
#[derive(Debug, Clone)]
pub struct FrequencySketch {
    table: Vec<u64>,
    mask: usize,
    sample_size: usize,
    additions: usize,
}

impl FrequencySketch {
    /// Create a sketch sized for roughly `capacity` distinct hot keys
    pub fn new(capacity: usize) -> Self {
        let words = capacity.max(MIN_WORDS).next_power_of_two();
        Self {
            table: vec![0; words],
            mask: words - 1,
            sample_size: capacity.max(1).saturating_mul(SAMPLE_MULTIPLIER),
            additions: 0,
        }
    }

    /// Record one access for `hash`
    pub fn increment(&mut self, hash: u64) {
        let mut added = false;
        for row in 0..ROWS {
            let (word, shift) = self.locate(hash, row);
            let counter = (self.table[word] >> shift) & 0xf;
            if counter < u64::from(MAX_FREQUENCY) {
                self.table[word] += 1 << shift;
                added = true;
            }
        }

        if added {
            self.additions += 1;
            if self.additions >= self.sample_size {
                self.reset();
            }
        }
    }

    /// Estimated access count for `hash`, at most [`MAX_FREQUENCY`]
    pub fn estimate(&self, hash: u64) -> u8 {
        let mut frequency = MAX_FREQUENCY;
        for row in 0..ROWS {
            let (word, shift) = self.locate(hash, row);
            let counter = ((self.table[word] >> shift) & 0xf) as u8;
            frequency = frequency.min(counter);
        }
        frequency
    }

    /// Halve every counter
    pub fn reset(&mut self) {
        for word in &mut self.table {
            *word = (*word >> 1) & RESET_MASK;
        }
        self.additions /= 2;
        tracing::trace!(sample_size = self.sample_size, "frequency sketch aged");
    }

    /// Zero every counter
    pub fn clear(&mut self) {
        self.table.iter_mut().for_each(|word| *word = 0);
        self.additions = 0;
    }

    /// Increments recorded since the last aging pass (halved on reset)
    pub fn additions(&self) -> usize {
        self.additions
    }

    /// Increments that trigger an aging pass
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    #[inline]
    fn locate(&self, hash: u64, row: usize) -> (usize, u32) {
        let mut h = hash.wrapping_add(ROW_SEEDS[row]).wrapping_mul(ROW_SEEDS[row]);
        h ^= h >> 32;
        let word = (h as usize) & self.mask;
        let slot = (row << 2) | ((h >> 61) as usize & 3);
        (word, (slot as u32) << 2)
    }
}
