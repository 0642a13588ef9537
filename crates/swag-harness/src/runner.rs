//! Test execution: phase sequencing, outcome recording, run report

use crate::artifacts::{ArtifactStore, Attachment};
use crate::capture::ArtifactCapture;
use crate::fixtures::FixtureRegistry;
use crate::item::{Phase, TestItem};
use crate::order;
use crate::recorder::{OutcomeLedger, OutcomeRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use swag_core::{Config, Result, SwagError};
use tracing::{error, info, warn};

/// Final record of one executed test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub suite: String,
    pub name: String,
    pub setup: OutcomeRecord,
    pub call: OutcomeRecord,
    pub teardown: OutcomeRecord,
    pub attachment: Option<Attachment>,
}

impl TestResult {
    /// A test passes only when setup succeeded and the body passed
    pub fn passed(&self) -> bool {
        !self.setup.is_failed() && self.call.status == crate::item::TestStatus::Passed
    }
}

/// Manifest of a whole run, serialized into the reports directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<TestResult>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Single-threaded test runner
///
/// Executes items one at a time: ordering once at collection, then for
/// each item a fresh fixture scope, the three phases with outcomes
/// recorded as they complete, and artifact capture at teardown.
pub struct Runner {
    config: Config,
    registry: FixtureRegistry,
}

impl Runner {
    pub fn new(config: Config, registry: FixtureRegistry) -> Self {
        Self { config, registry }
    }

    /// Run every collected item and persist the report manifest
    pub fn run(&self, mut items: Vec<TestItem>) -> Result<RunReport> {
        order::order_items(&mut items);

        let store = ArtifactStore::new(&self.config.reports_dir);
        let capture = ArtifactCapture::new(self.config.screenshot_on_failure);
        let mut ledger = OutcomeLedger::new();
        let started_at = Utc::now();
        let mut results = Vec::with_capacity(items.len());

        info!("Collected {} tests", items.len());

        for item in &items {
            results.push(self.run_one(item, &mut ledger, &capture, &store));
        }

        let passed = results.iter().filter(|r| r.passed()).count();
        let report = RunReport {
            started_at,
            finished_at: Utc::now(),
            total: results.len(),
            passed,
            failed: results.len() - passed,
            results,
        };

        self.persist(&report)?;

        info!(
            "Run finished: {} passed, {} failed, {} total",
            report.passed, report.failed, report.total
        );

        Ok(report)
    }

    fn run_one(
        &self,
        item: &TestItem,
        ledger: &mut OutcomeLedger,
        capture: &ArtifactCapture,
        store: &ArtifactStore,
    ) -> TestResult {
        let id = item.id();
        info!("Running {}", id);

        let mut scope = self.registry.scope();

        // Setup: resolve the declared fixtures. A factory failure marks
        // the test failed here; the body never runs.
        let setup = observe(|| {
            for name in item.uses {
                scope.resolve(name)?;
            }
            Ok(())
        });
        ledger.record(&id, Phase::Setup, setup.clone());

        let call = if setup.is_failed() {
            OutcomeRecord::skipped("setup failed")
        } else {
            observe(|| (item.body)(&mut scope))
        };
        ledger.record(&id, Phase::Call, call.clone());

        // Teardown: capture reads the recorded call outcome before the
        // scope (and with it the tab) is released. A capture failure is
        // noted on the teardown record but never fails the test.
        let (attachment, teardown) = match capture.run(&scope, ledger, store, &id) {
            Ok(attachment) => (attachment, OutcomeRecord::passed()),
            Err(e) => {
                warn!("Artifact capture failed for {}: {}", id, e);
                (
                    None,
                    OutcomeRecord::passed_with_message(format!("artifact capture failed: {}", e)),
                )
            }
        };
        ledger.record(&id, Phase::Teardown, teardown.clone());
        drop(scope);

        if setup.is_failed() {
            error!("{} FAILED in setup: {:?}", id, setup.message);
        } else if call.is_failed() {
            error!("{} FAILED: {:?}", id, call.message);
        } else {
            info!("{} passed", id);
        }

        TestResult {
            id,
            suite: item.suite.to_string(),
            name: item.name.clone(),
            setup,
            call,
            teardown,
            attachment,
        }
    }

    fn persist(&self, report: &RunReport) -> Result<()> {
        std::fs::create_dir_all(&self.config.reports_dir)?;

        let filename = format!("report-{}.json", report.started_at.format("%Y%m%d-%H%M%S"));
        let path = std::path::Path::new(&self.config.reports_dir).join(filename);
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| SwagError::Artifact(format!("Failed to serialize report: {}", e)))?;
        std::fs::write(&path, json)?;

        info!("Report written to {}", path.display());
        Ok(())
    }
}

/// Run one phase, converting errors and panics into an outcome record
/// without letting either abort the recording chain
fn observe<F: FnOnce() -> anyhow::Result<()>>(f: F) -> OutcomeRecord {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => OutcomeRecord::passed(),
        Ok(Err(e)) => OutcomeRecord::failed(format!("{:#}", e)),
        Err(payload) => OutcomeRecord::failed(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "test panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::TestStatus;
    use anyhow::ensure;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            reports_dir: dir.to_string_lossy().into_owned(),
            ..Config::default()
        }
    }

    fn registry_with_number() -> FixtureRegistry {
        let mut registry = FixtureRegistry::new();
        registry.register("num", &[], |_| Ok(42u32));
        registry.register("broken", &[], |_| -> swag_core::Result<u8> {
            Err(SwagError::Other("no browser today".to_string()))
        });
        registry
    }

    #[test]
    fn test_run_orders_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(test_config(dir.path()), registry_with_number());

        let items = vec![
            TestItem::new("test_cart", "c1", &["num"], |scope| {
                ensure!(*scope.get::<u32>("num")? == 42);
                Ok(())
            }),
            TestItem::new("test_login", "l1", &["num"], |_| Ok(())),
            TestItem::new("test_inventory", "i1", &["num"], |_| Ok(())),
        ];

        let report = runner.run(items).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.passed, 3);
        assert!(!report.has_failures());

        let order: Vec<&str> = report.results.iter().map(|r| r.suite.as_str()).collect();
        assert_eq!(order, vec!["test_login", "test_inventory", "test_cart"]);
    }

    #[test]
    fn test_failing_body_is_recorded_per_phase() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(test_config(dir.path()), registry_with_number());

        let items = vec![TestItem::new("test_login", "bad", &["num"], |_| {
            anyhow::bail!("badge count mismatch")
        })];

        let report = runner.run(items).unwrap();
        let result = &report.results[0];

        assert_eq!(report.failed, 1);
        assert_eq!(result.setup.status, TestStatus::Passed);
        assert_eq!(result.call.status, TestStatus::Failed);
        assert!(result.call.message.as_deref().unwrap().contains("badge count"));
        assert_eq!(result.teardown.status, TestStatus::Passed);
    }

    #[test]
    fn test_setup_failure_skips_body_but_finishes_teardown() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(test_config(dir.path()), registry_with_number());

        let items = vec![TestItem::new("test_cart", "needs_broken", &["broken"], |_| {
            panic!("body must never run");
        })];

        let report = runner.run(items).unwrap();
        let result = &report.results[0];

        assert_eq!(result.setup.status, TestStatus::Failed);
        assert_eq!(result.call.status, TestStatus::Skipped);
        assert_eq!(result.teardown.status, TestStatus::Passed);
        assert!(!result.passed());
    }

    #[test]
    fn test_panicking_body_becomes_failure() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(test_config(dir.path()), registry_with_number());

        let items = vec![TestItem::new("test_cart", "panics", &[], |_| {
            panic!("index out of bounds, sort of");
        })];

        let report = runner.run(items).unwrap();
        let result = &report.results[0];

        assert_eq!(result.call.status, TestStatus::Failed);
        assert!(result
            .call
            .message
            .as_deref()
            .unwrap()
            .contains("index out of bounds"));
    }

    #[test]
    fn test_teardown_note_does_not_fail_the_test() {
        let result = TestResult {
            id: "test_login::l1".to_string(),
            suite: "test_login".to_string(),
            name: "l1".to_string(),
            setup: OutcomeRecord::passed(),
            call: OutcomeRecord::passed(),
            teardown: OutcomeRecord::passed_with_message("artifact capture failed: disk full"),
            attachment: None,
        };

        assert!(result.passed());
        assert_eq!(result.teardown.status, TestStatus::Passed);
        assert!(result
            .teardown
            .message
            .as_deref()
            .unwrap()
            .contains("capture failed"));
    }

    #[test]
    fn test_report_manifest_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(test_config(dir.path()), registry_with_number());

        runner
            .run(vec![TestItem::new("test_login", "l1", &[], |_| Ok(()))])
            .unwrap();

        let manifests: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("report-"))
            .collect();
        assert_eq!(manifests.len(), 1);

        let raw = std::fs::read_to_string(manifests[0].path()).unwrap();
        let parsed: RunReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.passed, 1);
    }
}
