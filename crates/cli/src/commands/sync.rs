use anyhow::Result;
use quotebook_core::ReconcileOutcome;

use super::open_service;
use crate::config::Config;

pub(crate) async fn run_sync(config: &Config) -> Result<()> {
    let service = open_service(config).await?;
    let report = service.sync().await?;
    match report.outcome {
        ReconcileOutcome::SourceEmpty => println!("Remote returned nothing; local quotes unchanged."),
        ReconcileOutcome::Merged { added } => {
            println!("Synced: {added} new quotes, {} total.", report.total);
        },
    }
    Ok(())
}
