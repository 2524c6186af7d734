//! Quote-number allocation.
//!
//! The creation endpoint assigns the definitive per-user sequence, so the
//! number placed in the payload is a request hint. The allocator contract
//! exists so the hint is at least monotonic within a session instead of a
//! hard-coded literal.

use crate::domain::quote::QuoteNumber;

pub trait QuoteNumberAllocator {
    fn next(&mut self) -> QuoteNumber;
}

/// Session-scoped monotonic counter starting at 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequentialAllocator {
    last: u32,
}

impl SequentialAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the counter so the next allocation returns `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { last: first.saturating_sub(1) }
    }
}

impl QuoteNumberAllocator for SequentialAllocator {
    fn next(&mut self) -> QuoteNumber {
        self.last += 1;
        QuoteNumber(self.last)
    }
}
