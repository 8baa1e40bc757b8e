use crate::{ReportStore, Result};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use entity::csp_reports;
use tokio::sync::Mutex;

/// In-memory [`ReportStore`] holding report models in insertion order.
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    reports: Vec<csp_reports::Model>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a report with the given creation time and returns its id.
    pub async fn insert(&self, created: NaiveDateTime) -> i32 {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.reports.push(csp_reports::Model {
            id,
            created,
            modified: created,
            json: "{}".to_string(),
            is_valid: true,
        });
        id
    }

    pub async fn reports(&self) -> Vec<csp_reports::Model> {
        self.inner.lock().await.reports.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.reports.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ReportStore for MemoryReportStore {
    async fn delete_where_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        let mut inner = self.inner.lock().await;
        let before = inner.reports.len();
        inner.reports.retain(|r| r.created >= cutoff);
        Ok((before - inner.reports.len()) as u64)
    }

    async fn count_created_before(&self, cutoff: NaiveDateTime) -> Result<u64> {
        let inner = self.inner.lock().await;
        Ok(inner.reports.iter().filter(|r| r.created < cutoff).count() as u64)
    }
}
