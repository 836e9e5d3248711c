use super::level::LogLevel;
use lazy_static::lazy_static;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

lazy_static! {
    static ref GLOBAL_THRESHOLD: Threshold = Threshold::new(LogLevel::Info);
}

/// Shared minimum level at which log calls are emitted.
///
/// Cloning yields another handle onto the same cell, so a level set through one
/// logger is seen by every logger holding a clone. The check and the store are
/// independent relaxed operations: a call that already passed the filter is not
/// affected by a concurrent `set`.
#[derive(Clone)]
pub struct Threshold(Arc<AtomicU8>);

impl Threshold {
    /// Isolated cell, not shared with the process-wide one.
    pub fn new(level: LogLevel) -> Self {
        Threshold(Arc::new(AtomicU8::new(level.ordinal())))
    }

    /// Process-wide cell, starts out at `Info`.
    pub fn global() -> Self {
        GLOBAL_THRESHOLD.clone()
    }

    pub fn get(&self) -> LogLevel {
        // Only `set` stores into the cell, so the ordinal is always valid.
        LogLevel::from_ordinal(self.0.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set(&self, level: LogLevel) {
        self.0.store(level.ordinal(), Ordering::Relaxed);
    }

    pub fn allows(&self, level: LogLevel) -> bool {
        level >= self.get()
    }

    pub fn shares_cell_with(&self, other: &Threshold) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::global()
    }
}

impl fmt::Debug for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Threshold").field(&self.get()).finish()
    }
}
