// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

//! Machine timer handle
//!
//! The harness only needs the core-local timer: two memory-mapped
//! 64-bit registers (`mtime`, `mtimecmp`) and a way to idle until the
//! timer interrupt would fire. The handle is constructed once from the
//! platform's register addresses and passed explicitly to whoever
//! schedules a run; there is no ambient global state. Per-case
//! correctness never depends on this layer.

use std::ptr::NonNull;

/// Machine timer interface
pub trait Timer {
    fn read_mtime(&self) -> u64;

    fn read_mtimecmp(&self) -> u64;

    fn write_mtime(&mut self, value: u64);

    fn write_mtimecmp(&mut self, value: u64);

    /// Idle until a timer interrupt would wake the hart.
    fn wait_for_interrupt(&mut self);
}

/// MMIO-backed timer handle
pub struct Clint {
    mtime: NonNull<u64>,
    mtimecmp: NonNull<u64>,
}

impl Clint {
    /// Construct the handle over the platform's timer registers.
    ///
    /// # Safety
    ///
    /// Both pointers must refer to the platform's `mtime` and
    /// `mtimecmp` registers, be valid for volatile 64-bit reads and
    /// writes for the lifetime of the handle, and must not be aliased
    /// by another [`Clint`].
    pub unsafe fn new(mtime: NonNull<u64>, mtimecmp: NonNull<u64>) -> Self {
        Self { mtime, mtimecmp }
    }
}

impl Timer for Clint {
    fn read_mtime(&self) -> u64 {
        // SAFETY: guaranteed readable by the constructor contract.
        unsafe { self.mtime.as_ptr().read_volatile() }
    }

    fn read_mtimecmp(&self) -> u64 {
        // SAFETY: guaranteed readable by the constructor contract.
        unsafe { self.mtimecmp.as_ptr().read_volatile() }
    }

    fn write_mtime(&mut self, value: u64) {
        // SAFETY: guaranteed writable by the constructor contract.
        unsafe { self.mtime.as_ptr().write_volatile(value) }
    }

    fn write_mtimecmp(&mut self, value: u64) {
        // SAFETY: guaranteed writable by the constructor contract.
        unsafe { self.mtimecmp.as_ptr().write_volatile(value) }
    }

    /// Interrupt detection is polling-based: spin until the comparand
    /// is reached.
    fn wait_for_interrupt(&mut self) {
        while self.read_mtime() < self.read_mtimecmp() {
            std::hint::spin_loop();
        }
    }
}

// SAFETY: the handle is the sole owner of its registers per the
// constructor contract, so moving it to another thread is fine.
unsafe impl Send for Clint {}

/// Owned timer for hosted runs and unit tests.
#[derive(Clone, Debug, Default)]
pub struct SoftTimer {
    mtime: u64,
    mtimecmp: u64,
}

impl Timer for SoftTimer {
    fn read_mtime(&self) -> u64 {
        self.mtime
    }

    fn read_mtimecmp(&self) -> u64 {
        self.mtimecmp
    }

    fn write_mtime(&mut self, value: u64) {
        self.mtime = value;
    }

    fn write_mtimecmp(&mut self, value: u64) {
        self.mtimecmp = value;
    }

    fn wait_for_interrupt(&mut self) {
        self.mtime = self.mtime.max(self.mtimecmp);
    }
}

/// A point in timer time bounding a whole run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline(u64);

impl Deadline {
    /// Deadline `ticks` from the timer's current time.
    pub fn after(timer: &impl Timer, ticks: u64) -> Self {
        Self(timer.read_mtime().saturating_add(ticks))
    }

    pub fn expired(&self, timer: &impl Timer) -> bool {
        timer.read_mtime() >= self.0
    }

    /// Program the timer comparand so that the interrupt fires at the
    /// deadline.
    pub fn arm(&self, timer: &mut impl Timer) {
        timer.write_mtimecmp(self.0);
    }
}
