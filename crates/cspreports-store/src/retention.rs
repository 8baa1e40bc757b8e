use crate::{Result, Store};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Bulk removal of reports by creation time.
///
/// Cutoffs are given in the storage convention for `created` (UTC when the
/// application is time-zone aware, local wall-clock time otherwise). Both
/// operations use strict less-than.
#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn delete_where_created_before(&self, cutoff: NaiveDateTime) -> Result<u64>;

    async fn count_created_before(&self, cutoff: NaiveDateTime) -> Result<u64>;
}

#[async_trait]
impl ReportStore for Store {
    async fn delete_where_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        let deleted = self.reports().delete_created_before(cutoff).await?;
        tracing::debug!("Deleted {} report row(s) created before {}", deleted, cutoff);
        Ok(deleted)
    }

    async fn count_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        self.reports().count_created_before(cutoff).await
    }
}
