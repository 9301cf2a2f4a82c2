//! Switchable store failures

use std::sync::atomic::{AtomicBool, Ordering};

use food_core::error::DomainError;
use food_core::traits::RepoResult;

/// Failure switches shared by an in-memory repository.
///
/// Each switch stays on until turned off again.
#[derive(Debug, Default)]
pub struct FaultInjection {
    reads: AtomicBool,
    participant_writes: AtomicBool,
    expiry_writes: AtomicBool,
    deletes: AtomicBool,
}

impl FaultInjection {
    pub fn fail_reads(&self, on: bool) {
        self.reads.store(on, Ordering::SeqCst);
    }

    pub fn fail_participant_writes(&self, on: bool) {
        self.participant_writes.store(on, Ordering::SeqCst);
    }

    pub fn fail_expiry_writes(&self, on: bool) {
        self.expiry_writes.store(on, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, on: bool) {
        self.deletes.store(on, Ordering::SeqCst);
    }

    /// Turn every switch off
    pub fn reset(&self) {
        self.fail_reads(false);
        self.fail_participant_writes(false);
        self.fail_expiry_writes(false);
        self.fail_deletes(false);
    }

    pub(crate) fn check_read(&self) -> RepoResult<()> {
        Self::check(&self.reads, "read")
    }

    pub(crate) fn check_participant_write(&self) -> RepoResult<()> {
        Self::check(&self.participant_writes, "participant write")
    }

    pub(crate) fn check_expiry_write(&self) -> RepoResult<()> {
        Self::check(&self.expiry_writes, "expiry write")
    }

    pub(crate) fn check_delete(&self) -> RepoResult<()> {
        Self::check(&self.deletes, "delete")
    }

    fn check(flag: &AtomicBool, op: &str) -> RepoResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError(format!("injected {op} failure")))
        } else {
            Ok(())
        }
    }
}
