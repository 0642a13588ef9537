//! Failure-aware screenshot capture, applied to every test at teardown
//!
//! The capture step never wraps the test body and never alters its
//! outcome. It reads the call-phase record from the ledger, photographs
//! the tab exactly as the body left it, and attaches the image under a
//! name that encodes the observed status. A capture failure surfaces as
//! a non-fatal note on the teardown record; it must never mask the
//! test's own result.

use crate::artifacts::{ArtifactStore, Attachment, ContentType};
use crate::fixtures::{FixtureScope, PAGE_FIXTURE};
use crate::recorder::OutcomeLedger;
use std::rc::Rc;
use swag_browser::PageDriver;
use swag_core::Result;
use tracing::{debug, warn};

/// Teardown-time screenshot hook
pub struct ArtifactCapture {
    /// When false, only failed tests are captured
    capture_all: bool,
}

impl ArtifactCapture {
    pub fn new(capture_all: bool) -> Self {
        Self { capture_all }
    }

    /// Capture and attach one screenshot for the finished test
    ///
    /// Returns the attachment metadata, `Ok(None)` when capture was
    /// legitimately skipped, or the capture/storage error so the caller
    /// can note it without failing the test.
    pub fn run(
        &self,
        scope: &FixtureScope,
        ledger: &OutcomeLedger,
        store: &ArtifactStore,
        test_id: &str,
    ) -> Result<Option<Attachment>> {
        let failed = ledger.call_failed(test_id);

        if !self.capture_all && !failed {
            debug!("Screenshot capture disabled for passing tests, skipping {}", test_id);
            return Ok(None);
        }

        let name = if failed {
            "screenshot_failed"
        } else {
            "screenshot_passed"
        };

        // Peek only. If setup died before the page fixture existed,
        // there is nothing to photograph.
        let driver: Rc<PageDriver> = match scope.cached(PAGE_FIXTURE) {
            Some(driver) => driver,
            None => {
                warn!("No page fixture for {}, skipping screenshot", test_id);
                return Ok(None);
            }
        };

        let bytes = driver.screenshot_full_page()?;
        let attachment = store.attach(test_id, name, ContentType::Png, &bytes)?;

        debug!("Attached {} for {}", name, test_id);
        Ok(Some(attachment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureRegistry;
    use crate::item::Phase;
    use crate::recorder::OutcomeRecord;

    #[test]
    fn test_passing_test_is_skipped_when_capture_all_is_off() {
        let registry = FixtureRegistry::new();
        let scope = registry.scope();
        let mut ledger = OutcomeLedger::new();
        ledger.record("t1", Phase::Call, OutcomeRecord::passed());

        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let capture = ArtifactCapture::new(false);
        assert!(capture.run(&scope, &ledger, &store, "t1").unwrap().is_none());
    }

    #[test]
    fn test_missing_page_fixture_is_skipped() {
        // Failed test, capture enabled, but setup never built a page.
        let registry = FixtureRegistry::new();
        let scope = registry.scope();
        let mut ledger = OutcomeLedger::new();
        ledger.record("t1", Phase::Call, OutcomeRecord::failed("boom"));

        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let capture = ArtifactCapture::new(true);
        assert!(capture.run(&scope, &ledger, &store, "t1").unwrap().is_none());
    }
}
