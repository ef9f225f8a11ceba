//! Sync command - pull event registrants from GoTo products into the CRM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use gotosync_core::{EventSource, ProductCatalog, RunGuard, SyncDriver, SyncObserver};
use gotosync_domain::{Config, GotoSyncError, Product, RunOutcome, SyncReport, SyncRequest};
use gotosync_infra::auth::SettingsAuthorizer;
use gotosync_infra::config;
use gotosync_infra::http::HttpClient;
use gotosync_infra::integrations::crm::CrmClient;
use gotosync_infra::integrations::goto::{GotoClient, GotoRegistrantSyncer};
use gotosync_infra::run_lock::{self, RunLock};

const SKIP_MESSAGE: &str = "Another synchronization run is still active. Skipped.";

/// Arguments for the sync command.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Product to synchronize (webinar, meeting, training or assist).
    #[arg(long, short = 'p')]
    pub product: Option<String>,

    /// Single event id to synchronize instead of the whole listing.
    #[arg(long, short = 'i')]
    pub id: Option<String>,

    /// Also print debug details for failed events.
    #[arg(long)]
    pub verbose: bool,
}

impl SyncArgs {
    fn request(&self) -> SyncRequest {
        SyncRequest { product: self.product.clone(), event_id: self.id.clone() }
    }
}

/// Execute the sync command.
///
/// Event-level failures are printed and recorded in the run report; they
/// never fail the process. An invalid product or a concurrently active run
/// is printed and exits zero as well, so cron wrappers only alarm on runs
/// that could not even start.
///
/// # Errors
///
/// Returns an error when the configuration cannot be loaded, the lock
/// directory cannot be prepared, or the run aborts outside the per-event
/// error handling.
pub async fn execute(args: &SyncArgs) -> Result<()> {
    let config = config::load().context("failed to load configuration")?;
    let request = args.request();

    // Overlapping cron invocations contend on a pid file keyed by the raw
    // product and id text, claimed before the request is validated.
    let lock_dir = run_lock::lock_dir(&config.sync);
    let _lock = match RunLock::try_acquire(&lock_dir, &request.run_key())
        .context("failed to prepare the run lock")?
    {
        Some(lock) => lock,
        None => {
            println!("{SKIP_MESSAGE}");
            return Ok(());
        }
    };

    let driver = build_driver(&config)?
        .with_observer(Arc::new(ConsoleObserver { verbose: args.verbose }));

    match driver.run(&request).await {
        Ok(report) => {
            print!("{}", render_summary(&report));
            Ok(())
        }
        Err(GotoSyncError::InvalidProduct(product)) => {
            println!("Invalid product: {product}. Aborted");
            Ok(())
        }
        Err(err) => Err(err).context("synchronization run failed"),
    }
}

fn build_driver(config: &Config) -> Result<SyncDriver> {
    let http =
        HttpClient::from_settings(&config.sync).context("failed to build the HTTP client")?;

    let goto = Arc::new(GotoClient::from_config(&config.goto, http.clone()));
    let crm = Arc::new(CrmClient::from_config(&config.crm, http));
    let authorizer = Arc::new(SettingsAuthorizer::from_config(&config.goto));

    Ok(SyncDriver::new(
        RunGuard::new(),
        ProductCatalog::new(authorizer),
        EventSource::new(goto.clone()),
        Arc::new(GotoRegistrantSyncer::new(goto, crm)),
    ))
}

/// Final stdout block for a finished run.
///
/// A run that found nothing authorized prints nothing; cron output stays
/// empty unless work was attempted or skipped.
fn render_summary(report: &SyncReport) -> String {
    match report.outcome {
        RunOutcome::Completed => {
            format!("{} contacts synchronized.\nDone.\n", report.ledger.total_contacts())
        }
        RunOutcome::SkippedActiveRun => format!("{SKIP_MESSAGE}\n"),
        RunOutcome::NothingToDo => String::new(),
    }
}

/// Observer that prints run milestones to stdout.
///
/// Line formats are stable; downstream cron wrappers parse them.
struct ConsoleObserver {
    verbose: bool,
}

impl SyncObserver for ConsoleObserver {
    fn on_product_started(&self, product: Product) {
        println!("Synchronizing registrants for {}", product.display_name());
    }

    fn on_event_started(&self, event_id: &str, label: &str) {
        println!("Synchronizing: [{event_id}] {label}");
    }

    fn on_event_failed(&self, product: Product, event_id: &str, error: &GotoSyncError) {
        println!("Error syncing {product}: {event_id}.");
        println!("{error}");
        if self.verbose {
            println!("{error:?}");
        }
    }

    fn on_directory_failed(&self, product: Product, error: &GotoSyncError) {
        println!("Error listing {product} events.");
        println!("{error}");
        if self.verbose {
            println!("{error:?}");
        }
    }
}
