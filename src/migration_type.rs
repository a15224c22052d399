//! Describes which kind of migration a store needs
use std::fmt;

use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub enum MigrationType {
    /// The store already matches the latest schema version
    None { version: String },
    /// The mapping between both versions can be inferred automatically
    Lightweight {
        source_version: String,
        destination_version: String,
    },
    /// The mapping between both versions has to be provided explicitly
    Heavyweight {
        source_version: String,
        destination_version: String,
    },
}

impl MigrationType {
    pub fn none(version: impl Into<String>) -> Self {
        MigrationType::None {
            version: version.into(),
        }
    }

    pub fn lightweight(
        source_version: impl Into<String>,
        destination_version: impl Into<String>,
    ) -> Self {
        MigrationType::Lightweight {
            source_version: source_version.into(),
            destination_version: destination_version.into(),
        }
    }

    pub fn heavyweight(
        source_version: impl Into<String>,
        destination_version: impl Into<String>,
    ) -> Self {
        MigrationType::Heavyweight {
            source_version: source_version.into(),
            destination_version: destination_version.into(),
        }
    }

    /// The schema version the store is migrated from
    pub fn source_version(&self) -> &str {
        match self {
            MigrationType::None { version } => version,
            MigrationType::Lightweight { source_version, .. }
            | MigrationType::Heavyweight { source_version, .. } => source_version,
        }
    }

    /// The schema version the store is migrated to
    pub fn destination_version(&self) -> &str {
        match self {
            MigrationType::None { version } => version,
            MigrationType::Lightweight {
                destination_version,
                ..
            }
            | MigrationType::Heavyweight {
                destination_version,
                ..
            } => destination_version,
        }
    }

    /// Whether the store has to be migrated at all.
    /// Equal source and destination versions still count as a migration
    /// for `Lightweight` and `Heavyweight`
    pub fn is_migration_needed(&self) -> bool {
        match self {
            MigrationType::None { .. } => false,
            MigrationType::Lightweight { .. } | MigrationType::Heavyweight { .. } => true,
        }
    }

    pub fn is_lightweight(&self) -> bool {
        matches!(self, MigrationType::Lightweight { .. })
    }

    pub fn is_heavyweight(&self) -> bool {
        matches!(self, MigrationType::Heavyweight { .. })
    }
}

impl fmt::Display for MigrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationType::None { version } => write!(f, "none ({})", version),
            MigrationType::Lightweight {
                source_version,
                destination_version,
            } => write!(
                f,
                "lightweight ({} -> {})",
                source_version, destination_version
            ),
            MigrationType::Heavyweight {
                source_version,
                destination_version,
            } => write!(
                f,
                "heavyweight ({} -> {})",
                source_version, destination_version
            ),
        }
    }
}
