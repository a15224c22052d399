//! An executor-style function reporting its outcome through a [`MigrationRecord`]
use migration_outcome::{
    error::StoreError, migration_record::MigrationRecord, migration_result::MigrationResult,
    migration_type::MigrationType,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const LATEST_VERSION: &str = "v3";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "migration_outcome=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for store_version in ["v3", "v2", "v1", "v0"] {
        let record = MigrationRecord::migration_start(format!("app-{}.sqlite", store_version))
            .migration_finished(migrate(store_version));

        match record.result() {
            Some(MigrationResult::Success(steps)) => {
                let steps = steps
                    .iter()
                    .map(|step| step.to_string())
                    .collect::<Vec<String>>();
                println!("{}: {} [{}]", record.store(), record.status(), steps.join(", "));
            }
            Some(MigrationResult::Failure(error)) => {
                println!("{}: {} - {}", record.store(), record.status(), error);
            }
            None => unreachable!("record was finished"),
        }
    }
}

/// v2 -> v3 is inferable, v1 -> v2 needs a custom mapping, nothing below v1 is supported
fn migrate(store_version: &str) -> MigrationResult {
    match store_version {
        LATEST_VERSION => MigrationResult::from_steps(vec![MigrationType::none(LATEST_VERSION)]),
        "v2" => MigrationResult::from_steps(vec![MigrationType::lightweight("v2", LATEST_VERSION)]),
        "v1" => MigrationResult::from_steps(vec![
            MigrationType::heavyweight("v1", "v2"),
            MigrationType::lightweight("v2", LATEST_VERSION),
        ]),
        other => MigrationResult::from_error(StoreError::mapping_model_not_found(
            format!("app-{}.sqlite", other),
            "Model",
            LATEST_VERSION,
        )),
    }
}
