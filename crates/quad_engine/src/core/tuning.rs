//! Live-tunable values
//!
//! A [`Tunable`] is a shared numeric cell that a control surface writes and a
//! system reads fresh every tick. Clones share the same cell; the last write
//! wins.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared `f32` that can be changed while the simulation runs
#[derive(Clone)]
pub struct Tunable {
    bits: Arc<AtomicU32>,
}

impl Tunable {
    /// Create a cell holding `value`
    pub fn new(value: f32) -> Self {
        Self {
            bits: Arc::new(AtomicU32::new(value.to_bits())),
        }
    }

    /// Current value
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Replace the value
    pub fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl fmt::Debug for Tunable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tunable").field(&self.get()).finish()
    }
}

impl From<f32> for Tunable {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
