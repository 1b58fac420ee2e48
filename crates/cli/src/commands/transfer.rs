use std::path::Path;

use anyhow::{Context as _, Result};

use super::open_service;
use crate::config::Config;

pub(crate) async fn run_export(config: &Config, out: &Path) -> Result<()> {
    let service = open_service(config).await?;
    let file = service.export().await?;
    tokio::fs::write(out, &file.bytes)
        .await
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("Exported {} quotes to {}", service.quotes().await.len(), out.display());
    Ok(())
}

pub(crate) async fn run_import(config: &Config, path: &Path) -> Result<()> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let service = open_service(config).await?;
    let report = service.import(&bytes).await?;
    println!(
        "Imported {} of {} quotes ({} duplicates, {} invalid)",
        report.added,
        report.parsed,
        report.parsed.saturating_sub(report.added).saturating_sub(report.skipped),
        report.skipped
    );
    Ok(())
}
