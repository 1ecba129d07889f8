//! Best-effort busy flag around awaited operations.
//!
//! # Design
//! - The flag is advisory: it disables controls while an operation is in
//!   flight, nothing more.
//! - Release happens in [`LockGuard`]'s `Drop`, so every exit path
//!   (completion, failure, cancellation) clears the flag.
//! - Overlapping operations are not queued. Each completion clears the
//!   shared flag, so a raised flag only means "at least one operation may
//!   still be in flight". Callers must not rely on strict mutual exclusion.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Shared busy flag for gating UI controls against async work.
///
/// Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct Lock {
    engaged: Rc<Cell<bool>>,
}

impl Lock {
    /// Create an unlocked flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an operation holding a guard may still be in flight.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.engaged.get()
    }

    /// Raise the flag until the returned guard is dropped.
    #[must_use]
    pub fn engage(&self) -> LockGuard {
        self.engaged.set(true);
        LockGuard {
            engaged: Rc::clone(&self.engaged),
        }
    }
}

/// Clears the owning [`Lock`] flag when dropped.
#[derive(Debug)]
pub struct LockGuard {
    engaged: Rc<Cell<bool>>,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        self.engaged.set(false);
    }
}

/// Run `op` with the flag raised for its full lifetime.
pub async fn run_locked<F: Future>(lock: &Lock, op: F) -> F::Output {
    let _guard = lock.engage();
    op.await
}

#[cfg(test)]
mod tests {
    use super::{Lock, run_locked};
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::{Pin, pin};
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    /// Stays pending until its shared flag is opened.
    struct Gate {
        open: Rc<Cell<bool>>,
    }

    impl Future for Gate {
        type Output = u32;

        fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<u32> {
            if self.open.get() {
                Poll::Ready(7)
            } else {
                Poll::Pending
            }
        }
    }

    #[test]
    fn flag_spans_engagement_to_drop() {
        let lock = Lock::new();
        assert!(!lock.is_locked());
        let guard = lock.engage();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn run_locked_clears_after_completion() {
        let lock = Lock::new();
        let open = Rc::new(Cell::new(false));
        let mut op = pin!(run_locked(
            &lock,
            Gate {
                open: Rc::clone(&open),
            }
        ));
        let mut cx = Context::from_waker(Waker::noop());

        assert_eq!(op.as_mut().poll(&mut cx), Poll::Pending);
        assert!(lock.is_locked());

        open.set(true);
        assert_eq!(op.as_mut().poll(&mut cx), Poll::Ready(7));
        assert!(!lock.is_locked());
    }

    #[test]
    fn dropping_an_operation_releases_the_flag() {
        let lock = Lock::new();
        {
            let mut op = pin!(run_locked(
                &lock,
                Gate {
                    open: Rc::new(Cell::new(false)),
                }
            ));
            let mut cx = Context::from_waker(Waker::noop());
            assert_eq!(op.as_mut().poll(&mut cx), Poll::Pending);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn overlapping_guards_clear_loosely() {
        let lock = Lock::new();
        let first = lock.engage();
        let second = lock.engage();
        // The first completion lowers the shared flag even though the
        // second operation is still in flight.
        drop(first);
        assert!(!lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
