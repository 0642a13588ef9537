//! Test item model: one executable test case and its lifecycle phases

use crate::fixtures::FixtureScope;
use serde::{Deserialize, Serialize};

/// A test body: runs against the fixtures resolved for this invocation
pub type TestBody = Box<dyn Fn(&mut FixtureScope) -> anyhow::Result<()>>;

/// One collected test case
///
/// Belongs to exactly one suite; its execution position is decided once,
/// at collection time, by the ordering policy.
pub struct TestItem {
    /// Owning suite (module) name, e.g. `test_login`
    pub suite: &'static str,
    /// Display name; parametrized cases carry a `[param]` suffix
    pub name: String,
    /// Fixtures resolved during the setup phase, before the body runs
    pub uses: &'static [&'static str],
    /// The test body itself
    pub body: TestBody,
}

impl TestItem {
    pub fn new(
        suite: &'static str,
        name: impl Into<String>,
        uses: &'static [&'static str],
        body: impl Fn(&mut FixtureScope) -> anyhow::Result<()> + 'static,
    ) -> Self {
        Self {
            suite,
            name: name.into(),
            uses,
            body: Box::new(body),
        }
    }

    /// Stable identifier: `suite::name`
    pub fn id(&self) -> String {
        format!("{}::{}", self.suite, self.name)
    }
}

impl std::fmt::Debug for TestItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestItem")
            .field("suite", &self.suite)
            .field("name", &self.name)
            .field("uses", &self.uses)
            .finish()
    }
}

/// One phase of a test's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Call,
    Teardown,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Call => write!(f, "call"),
            Self::Teardown => write!(f, "teardown"),
        }
    }
}

/// Observed status of one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Failed => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id() {
        let item = TestItem::new("test_login", "test_standard_user", &[], |_| Ok(()));
        assert_eq!(item.id(), "test_login::test_standard_user");
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Setup.to_string(), "setup");
        assert_eq!(Phase::Call.to_string(), "call");
        assert_eq!(Phase::Teardown.to_string(), "teardown");
    }
}
