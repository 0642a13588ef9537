//! Phase outcome recording
//!
//! The original design attached outcomes to the test object as
//! dynamically named properties; here they live in an explicit ledger
//! keyed by (test id, phase), written once immediately after each phase
//! and read by teardown-time consumers of the same test.

use crate::item::{Phase, TestStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Observed outcome of one (test, phase) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    pub status: TestStatus,
    pub message: Option<String>,
}

impl OutcomeRecord {
    pub fn passed() -> Self {
        Self {
            status: TestStatus::Passed,
            message: None,
        }
    }

    /// A passing record carrying a non-fatal note (e.g. a capture
    /// failure observed during teardown)
    pub fn passed_with_message(message: impl Into<String>) -> Self {
        Self {
            status: TestStatus::Passed,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: TestStatus::Failed,
            message: Some(message.into()),
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            status: TestStatus::Skipped,
            message: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }
}

/// Write-once map of phase outcomes for the whole run
#[derive(Default)]
pub struct OutcomeLedger {
    records: HashMap<(String, Phase), OutcomeRecord>,
}

impl OutcomeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a phase outcome; a second write for the same key is a
    /// harness bug and is ignored rather than overwriting the first
    pub fn record(&mut self, test_id: &str, phase: Phase, record: OutcomeRecord) {
        let key = (test_id.to_string(), phase);
        if self.records.contains_key(&key) {
            warn!("Duplicate outcome for {} phase {}, keeping first", test_id, phase);
            return;
        }
        self.records.insert(key, record);
    }

    pub fn get(&self, test_id: &str, phase: Phase) -> Option<&OutcomeRecord> {
        self.records.get(&(test_id.to_string(), phase))
    }

    /// Whether the call phase recorded a failure
    ///
    /// Absent records count as not-failed: only the call phase gates the
    /// artifact label, so a test failing solely in teardown still reads
    /// as passed here. Known policy, not a bug.
    pub fn call_failed(&self, test_id: &str) -> bool {
        self.get(test_id, Phase::Call)
            .map(OutcomeRecord::is_failed)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_write_once() {
        let mut ledger = OutcomeLedger::new();
        ledger.record("t1", Phase::Call, OutcomeRecord::failed("boom"));
        ledger.record("t1", Phase::Call, OutcomeRecord::passed());

        assert!(ledger.get("t1", Phase::Call).unwrap().is_failed());
    }

    #[test]
    fn test_phases_are_independent() {
        let mut ledger = OutcomeLedger::new();
        ledger.record("t1", Phase::Setup, OutcomeRecord::passed());
        ledger.record("t1", Phase::Call, OutcomeRecord::failed("assertion"));

        assert!(!ledger.get("t1", Phase::Setup).unwrap().is_failed());
        assert!(ledger.call_failed("t1"));
        assert!(ledger.get("t1", Phase::Teardown).is_none());
    }

    #[test]
    fn test_missing_call_record_reads_as_not_failed() {
        let ledger = OutcomeLedger::new();
        assert!(!ledger.call_failed("never_ran"));
    }
}
