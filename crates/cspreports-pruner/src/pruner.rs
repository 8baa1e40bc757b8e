use crate::{Cutoff, Result};
use cspreports_store::ReportStore;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Outcome of a single prune run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruneSummary {
    pub cutoff: Cutoff,
    pub deleted: u64,
}

impl fmt::Display for PruneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted all reports created before {}.", self.cutoff)
    }
}

/// Deletes reports older than a cutoff from a [`ReportStore`].
pub struct RetentionPruner {
    store: Arc<dyn ReportStore>,
}

impl RetentionPruner {
    pub fn new(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Deletes every report created strictly before `cutoff`.
    pub async fn prune(&self, cutoff: Cutoff) -> Result<PruneSummary> {
        info!("Deleting reports created before {}", cutoff);

        let deleted = self
            .store
            .delete_where_created_before(cutoff.to_storage())
            .await?;

        info!("Deleted {} report(s)", deleted);

        Ok(PruneSummary { cutoff, deleted })
    }

    /// Counts the reports [`prune`](Self::prune) would delete, without deleting them.
    pub async fn preview(&self, cutoff: Cutoff) -> Result<u64> {
        Ok(self.store.count_created_before(cutoff.to_storage()).await?)
    }
}
