use ::entity::{csp_reports, prelude::*};
use chrono::NaiveDateTime;
use sea_orm::*;

pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<csp_reports::Model>, DbErr> {
        CspReports::find_by_id(id).one(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        CspReports::find().count(self.db).await
    }

    pub async fn create(
        &self,
        report: csp_reports::ActiveModel,
    ) -> Result<csp_reports::Model, DbErr> {
        report.insert(self.db).await
    }

    pub async fn count_created_before(&self, cutoff: NaiveDateTime) -> crate::Result<u64> {
        Ok(CspReports::find()
            .filter(csp_reports::Column::Created.lt(cutoff))
            .count(self.db)
            .await?)
    }

    /// Deletes every report created strictly before `cutoff` in one statement.
    pub async fn delete_created_before(&self, cutoff: NaiveDateTime) -> crate::Result<u64> {
        let result = CspReports::delete_many()
            .filter(csp_reports::Column::Created.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
