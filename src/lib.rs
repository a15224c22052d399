//! This crate describes the outcome of a persistent store schema migration.
//! It doesn't run migrations by itself:
//! a migration executor reports every step it completed as a [`migration_type::MigrationType`]
//! and hands back a [`migration_result::MigrationResult`], either the steps or the [`error::StoreError`] it stopped with
//!
//! # Example
//!
//! ```
//! use migration_outcome::{
//!     error::{ErrorCode, StoreError},
//!     migration_result::MigrationResult,
//!     migration_type::MigrationType,
//! };
//!
//! fn migrate(store_version: &str) -> MigrationResult {
//!     match store_version {
//!         "v3" => MigrationResult::from_steps(vec![MigrationType::none("v3")]),
//!         "v2" => MigrationResult::from_steps(vec![MigrationType::lightweight("v2", "v3")]),
//!         _ => MigrationResult::from_error(StoreError::mapping_model_not_found(
//!             "/tmp/app.sqlite",
//!             "Model",
//!             "v3",
//!         )),
//!     }
//! }
//!
//! let result = migrate("v2");
//! assert!(result.is_success());
//! assert!(result.is_migration_performed());
//!
//! match migrate("v1") {
//!     MigrationResult::Success(_) => unreachable!(),
//!     MigrationResult::Failure(error) => {
//!         assert_eq!(error.code(), ErrorCode::MappingModelNotFound)
//!     }
//! }
//! ```

pub mod error;
pub mod migration_record;
pub mod migration_result;
pub mod migration_status;
pub mod migration_type;
