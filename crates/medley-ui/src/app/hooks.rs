//! Reusable hooks for gating controls on in-flight operations.

use crate::core::lock::Lock;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle returned by [`use_lock`].
#[derive(Clone)]
pub(crate) struct LockHandle {
    lock: Rc<Lock>,
    locked: UseStateHandle<bool>,
}

impl LockHandle {
    /// Whether a wrapped operation may still be in flight.
    pub(crate) fn locked(&self) -> bool {
        *self.locked
    }

    /// Run `op` with the flag raised until it completes.
    ///
    /// Overlapping calls are not queued; each completion lowers the shared
    /// flag, mirroring the loose semantics of [`crate::core::lock`].
    pub(crate) fn run<F>(&self, op: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let guard = self.lock.engage();
        self.locked.set(true);
        let lock = Rc::clone(&self.lock);
        let locked = self.locked.clone();
        spawn_local(async move {
            op.await;
            drop(guard);
            locked.set(lock.is_locked());
        });
    }
}

/// Busy flag for disabling controls while an async operation runs.
#[hook]
pub(crate) fn use_lock() -> LockHandle {
    let lock = use_memo(|_| Lock::new(), ());
    let locked = use_state(|| false);
    LockHandle { lock, locked }
}
