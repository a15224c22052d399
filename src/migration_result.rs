//! Describes how an attempted migration ended
use serde_derive::{Deserialize, Serialize};

use crate::{
    error::{ErrorCode, StoreError, UserInfo},
    migration_type::MigrationType,
};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum MigrationResult {
    /// Every step was completed, in the order they ran.
    /// No steps means the store didn't need to be migrated
    Success(Vec<MigrationType>),
    /// The migration didn't complete. Steps that already ran aren't reported
    Failure(StoreError),
}

impl MigrationResult {
    pub fn from_steps<I>(steps: I) -> Self
    where
        I: IntoIterator<Item = MigrationType>,
    {
        MigrationResult::Success(steps.into_iter().collect())
    }

    pub fn from_error(error: StoreError) -> Self {
        tracing::debug!(
            code = error.code().value(),
            domain = error.domain(),
            "migration failed: {}",
            error
        );

        MigrationResult::Failure(error)
    }

    pub fn from_error_code(code: impl Into<ErrorCode>) -> Self {
        Self::from_error_code_with_info(code, UserInfo::new())
    }

    pub fn from_error_code_with_info(code: impl Into<ErrorCode>, user_info: UserInfo) -> Self {
        Self::from_error(StoreError::with_info(code, user_info))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MigrationResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Whether at least one completed step actually changed the store
    pub fn is_migration_performed(&self) -> bool {
        match self {
            MigrationResult::Success(steps) => steps.iter().any(MigrationType::is_migration_needed),
            MigrationResult::Failure(_) => false,
        }
    }

    pub fn steps(&self) -> Option<&[MigrationType]> {
        match self {
            MigrationResult::Success(steps) => Some(steps),
            MigrationResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            MigrationResult::Success(_) => None,
            MigrationResult::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<Vec<MigrationType>, StoreError> {
        match self {
            MigrationResult::Success(steps) => Ok(steps),
            MigrationResult::Failure(error) => Err(error),
        }
    }
}

impl From<Vec<MigrationType>> for MigrationResult {
    fn from(steps: Vec<MigrationType>) -> Self {
        MigrationResult::Success(steps)
    }
}

impl From<StoreError> for MigrationResult {
    fn from(error: StoreError) -> Self {
        MigrationResult::from_error(error)
    }
}

impl From<MigrationResult> for Result<Vec<MigrationType>, StoreError> {
    fn from(result: MigrationResult) -> Self {
        result.into_result()
    }
}
