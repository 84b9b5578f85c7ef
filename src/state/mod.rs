//! Widget-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`conversation`, `ui`) so the gateway depends
//! only on the conversation store and the view only on what it renders.

pub mod conversation;
pub mod ui;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a store mutex, recovering the data if a previous holder panicked.
///
/// Store mutations are single appends or flag flips, so a poisoned store is
/// still consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
