//! Process-wide lifecycle counters for record allocations
//!
//! Every record constructor bumps an allocation counter and every `Drop`
//! bumps the matching release counter, so a harness can observe live
//! counts returning to baseline after teardown. The counters are global:
//! concurrent callers should serialize around delta assertions.

use std::sync::atomic::{AtomicUsize, Ordering};

static MANAGERS_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static MANAGERS_RELEASED: AtomicUsize = AtomicUsize::new(0);
static EMPLOYEES_ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static EMPLOYEES_RELEASED: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn manager_allocated() {
    MANAGERS_ALLOCATED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn manager_released() {
    MANAGERS_RELEASED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn employee_allocated() {
    EMPLOYEES_ALLOCATED.fetch_add(1, Ordering::Relaxed);
}

pub(crate) fn employee_released() {
    EMPLOYEES_RELEASED.fetch_add(1, Ordering::Relaxed);
}

/// Total manager records ever allocated by this process.
pub fn allocated_managers() -> usize {
    MANAGERS_ALLOCATED.load(Ordering::Relaxed)
}

/// Total employee records ever allocated by this process.
pub fn allocated_employees() -> usize {
    EMPLOYEES_ALLOCATED.load(Ordering::Relaxed)
}

/// Manager records currently alive.
pub fn live_managers() -> usize {
    allocated_managers().saturating_sub(MANAGERS_RELEASED.load(Ordering::Relaxed))
}

/// Employee records currently alive.
pub fn live_employees() -> usize {
    allocated_employees().saturating_sub(EMPLOYEES_RELEASED.load(Ordering::Relaxed))
}
