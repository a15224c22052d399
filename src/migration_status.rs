//! Describes a migration status
use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::migration_result::MigrationResult;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum MigrationStatus {
    /// Migration which is running now
    InProgress,
    /// Migration was successfully completed
    Succeeded,
    /// Migration was completed with an error
    Failed,
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationStatus::InProgress => write!(f, "In Progress"),
            MigrationStatus::Succeeded => write!(f, "Succeeded"),
            MigrationStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl From<&MigrationResult> for MigrationStatus {
    fn from(result: &MigrationResult) -> Self {
        if result.is_success() {
            MigrationStatus::Succeeded
        } else {
            MigrationStatus::Failed
        }
    }
}
