//! # swag-harness
//!
//! The test-orchestration core of swagsuite:
//!
//! - **Ordering policy**: authentication suites run before everything
//!   else; unlisted suites keep their collection order at the back.
//! - **Fixture provider**: an explicit registry of named fixtures with
//!   declared dependencies, resolved fresh for every test invocation.
//! - **Outcome recorder**: one write-once record per (test, phase),
//!   readable by teardown-time consumers of the same test.
//! - **Artifact capture**: a full-page screenshot attached after every
//!   test, named for the call-phase outcome.
//! - **Runner**: sequences collection, ordering, the three phases, and
//!   the run report.

mod artifacts;
mod capture;
mod fixtures;
mod item;
mod order;
mod recorder;
mod runner;

pub use artifacts::{Attachment, ArtifactStore, ContentType};
pub use capture::ArtifactCapture;
pub use fixtures::{FixtureRegistry, FixtureScope, PAGE_FIXTURE};
pub use item::{Phase, TestItem, TestStatus};
pub use order::{order_items, order_key, SUITE_PRIORITY};
pub use recorder::{OutcomeLedger, OutcomeRecord};
pub use runner::{RunReport, Runner, TestResult};
