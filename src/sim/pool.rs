//! Fixed-capacity slot pools
//!
//! Pools are plain arrays scanned linearly; a slot is free when its own
//! sentinel field says so. The first free slot always wins, so slot reuse order
//! is deterministic.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("ran out of {pool} (capacity {capacity})")]
    Exhausted {
        pool: &'static str,
        capacity: usize,
    },
}

/// Index of the first slot for which `is_free` holds
pub fn first_free<T>(slots: &[T], is_free: impl Fn(&T) -> bool) -> Option<usize> {
    slots.iter().position(is_free)
}

/// Like [`first_free`], but reports exhaustion as a [`PoolError`]
pub fn acquire<T>(
    slots: &[T],
    pool: &'static str,
    is_free: impl Fn(&T) -> bool,
) -> Result<usize, PoolError> {
    first_free(slots, is_free).ok_or(PoolError::Exhausted {
        pool,
        capacity: slots.len(),
    })
}
