//! swagsuite - end-to-end suite runner for the Swag Labs demo shop
//!
//! Usage:
//!   swagsuite                 Run every suite in policy order
//!   swagsuite --suite NAME    Run one suite
//!   swagsuite --list          Print items in execution order
//!
//! Configuration comes from the environment (SWAG_* variables); the
//! flags below override it for one run.

use anyhow::{Context, Result};
use clap::Parser;
use swag_core::Config;
use swag_harness::{order_items, Runner};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "swagsuite")]
#[command(author, version, about = "End-to-end tests against the Swag Labs demo shop")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Run only the named suite (e.g. test_login)
    #[arg(long)]
    suite: Option<String>,

    /// Print collected items in execution order without running them
    #[arg(long)]
    list: bool,

    /// Override the headless toggle
    #[arg(long)]
    headless: Option<bool>,

    /// Override the reports directory
    #[arg(long, value_name = "DIR")]
    reports_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to initialize logging")?;

    let mut config = Config::from_env().context("Invalid configuration")?;
    if let Some(headless) = cli.headless {
        config.headless = headless;
    }
    if let Some(dir) = cli.reports_dir {
        config.reports_dir = dir;
    }

    let mut items = swag_suite::collect();
    if let Some(suite) = &cli.suite {
        items.retain(|item| item.suite == suite);
        anyhow::ensure!(!items.is_empty(), "no tests found for suite '{}'", suite);
    }

    if cli.list {
        order_items(&mut items);
        for item in &items {
            println!("{}", item.id());
        }
        return Ok(());
    }

    info!("Targeting {}", swag_core::BASE_URL);

    let registry = swag_suite::registry(&config);
    let runner = Runner::new(config, registry);
    let report = runner.run(items)?;

    println!(
        "{} passed, {} failed, {} total",
        report.passed, report.failed, report.total
    );

    if report.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
