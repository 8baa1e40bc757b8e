pub mod error;
pub mod memory;
pub mod reports;
pub mod retention;

pub use error::{Result, StoreError};
pub use memory::MemoryReportStore;
pub use retention::ReportStore;

use sea_orm::DatabaseConnection;

pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn reports(&self) -> reports::ReportRepository<'_> {
        reports::ReportRepository::new(&self.db)
    }
}
