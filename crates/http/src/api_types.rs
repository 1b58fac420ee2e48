//! Response types (Serialize)

use quotebook_service::SyncReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SyncStatusResponse {
    pub remote_enabled: bool,
    pub last_sync: Option<SyncReport>,
}
