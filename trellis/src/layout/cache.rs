//! Last-fitting-size memo for stacks.
//!
//! A stack remembers only the most recent (proposed size -> fitting size)
//! pair. Any mutation of the stack, or an explicit `set_needs_layout`, clears
//! it. Lookups happen through `&self`, so the entry lives in a `Cell`.

use std::cell::Cell;

use crate::primitives::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
struct CachedFit {
    proposed: Size,
    size: Size,
}

/// Single-entry cache for `Stack::fitting_size`.
#[derive(Debug, Default)]
pub struct FittingCache {
    entry: Cell<Option<CachedFit>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl FittingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached fitting size for exactly this proposal.
    #[inline]
    pub fn get(&self, proposed: Size) -> Option<Size> {
        match self.entry.get() {
            Some(cached) if cached.proposed == proposed => {
                self.hits.set(self.hits.get() + 1);
                Some(cached.size)
            }
            _ => {
                self.misses.set(self.misses.get() + 1);
                None
            }
        }
    }

    /// Replace the entry.
    #[inline]
    pub fn insert(&self, proposed: Size, size: Size) {
        self.entry.set(Some(CachedFit { proposed, size }));
    }

    #[inline]
    pub fn clear(&self) {
        self.entry.set(None);
    }

    pub fn is_empty(&self) -> bool {
        self.entry.get().is_none()
    }

    /// (hits, misses) since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits.get(), self.misses.get())
    }
}

// =========================================================================
// Tests
// =========================================================================
