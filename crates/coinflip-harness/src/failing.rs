//! Fault injection wrapper.

use std::sync::atomic::{AtomicUsize, Ordering};

use coinflip_core::{EntropyError, RandomSource};

/// Delegates to an inner source but fails on the `fail_on`-th call
/// (1-based). Calls after the failure delegate again.
#[derive(Debug)]
pub struct FailingSource<S> {
    inner: S,
    fail_on: usize,
    calls: AtomicUsize,
}

impl<S: RandomSource> FailingSource<S> {
    /// Wrap `inner`, failing on call number `fail_on`.
    pub const fn new(inner: S, fail_on: usize) -> Self {
        Self { inner, fail_on, calls: AtomicUsize::new(0) }
    }

    /// Total calls seen, including the failed one.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The wrapped source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: RandomSource> RandomSource for FailingSource<S> {
    fn random_bytes(&self, buffer: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call == self.fail_on {
            return Err(EntropyError::Unavailable {
                reason: format!("injected failure on call {call}"),
            });
        }
        self.inner.random_bytes(buffer)
    }
}
