use chrono::DateTime;
use chrono::Utc;
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::StoreError, migration_result::MigrationResult, migration_status::MigrationStatus,
    migration_type::MigrationType,
};

/// A log entry of one migration attempt on a store.
/// The status always follows the stored result
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MigrationRecord {
    store: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    /// Milliseconds between start and end
    duration: Option<i64>,
    result: Option<MigrationResult>,
}

impl MigrationRecord {
    pub fn migration_start(store: impl Into<String>) -> Self {
        let store = store.into();

        tracing::debug!(store = %store, "migration started");

        MigrationRecord {
            start_date: Utc::now(),
            end_date: None,
            duration: None,
            result: None,
            store,
        }
    }

    pub fn migration_finished(self, result: MigrationResult) -> Self {
        let end_date = Utc::now();
        let status = MigrationStatus::from(&result);

        match &result {
            MigrationResult::Success(steps) => tracing::info!(
                store = %self.store,
                steps = steps.len(),
                "migration {}",
                status
            ),
            MigrationResult::Failure(error) => tracing::warn!(
                store = %self.store,
                code = error.code().value(),
                "migration {}: {}",
                status,
                error
            ),
        }

        MigrationRecord {
            end_date: Some(end_date),
            duration: Some(self.calc_migration_duration(end_date)),
            result: Some(result),
            ..self
        }
    }

    pub fn migration_succeeded(self, steps: Vec<MigrationType>) -> Self {
        self.migration_finished(MigrationResult::Success(steps))
    }

    pub fn migration_failed(self, error: StoreError) -> Self {
        self.migration_finished(MigrationResult::Failure(error))
    }

    pub fn store(&self) -> &str {
        &self.store
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn duration(&self) -> Option<i64> {
        self.duration
    }

    pub fn result(&self) -> Option<&MigrationResult> {
        self.result.as_ref()
    }

    pub fn status(&self) -> MigrationStatus {
        self.result
            .as_ref()
            .map_or(MigrationStatus::InProgress, MigrationStatus::from)
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    fn calc_migration_duration(&self, end_date: DateTime<Utc>) -> i64 {
        (end_date - self.start_date).num_milliseconds().max(0)
    }
}
