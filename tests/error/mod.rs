//! These tests check the error registry: codes, messages and payloads
use std::collections::HashSet;

use anyhow::Context;
use migration_outcome::error::{
    ErrorCode, StoreError, ENTITY_KEY, ERROR_DOMAIN, EXISTING_PERSISTENT_STORE_URL_KEY,
    LOCAL_STORE_URL_KEY, TARGET_MODEL_KEY, TARGET_MODEL_VERSION_KEY, UNDERLYING_ERROR_KEY,
};
use serde_json::json;

#[test]
fn codes_map_to_stable_values() {
    let registered = [
        (ErrorCode::Unknown, 1),
        (ErrorCode::DifferentStorageExistsAtUrl, 2),
        (ErrorCode::MappingModelNotFound, 3),
        (ErrorCode::ProgressiveMigrationRequired, 4),
        (ErrorCode::AsynchronousMigrationRequired, 5),
        (ErrorCode::Internal, 6),
        (ErrorCode::User, 7),
        (ErrorCode::UserCancelled, 8),
        (ErrorCode::PersistentStoreNotFound, 9),
    ];

    for (code, value) in registered {
        assert_eq!(code.value(), value);
        assert_eq!(ErrorCode::from(value), code);
    }
}

#[test]
fn unregistered_codes_are_kept() {
    for value in [0, -1, 10, 42, i64::MAX] {
        let code = ErrorCode::from(value);

        assert_eq!(code, ErrorCode::Other(value));
        assert_eq!(i64::from(code), value);
    }
}

#[test]
fn new_error_uses_registry_message() {
    let error = StoreError::new(ErrorCode::UserCancelled);

    assert_eq!(error.code(), ErrorCode::UserCancelled);
    assert_eq!(error.domain(), ERROR_DOMAIN);
    assert_eq!(error.message(), ErrorCode::UserCancelled.default_message());
    assert!(error.user_info().is_empty());
}

#[test]
fn message_can_be_overridden() {
    let error = StoreError::internal("coordinator is gone");

    assert_eq!(error.code(), ErrorCode::Internal);
    assert_eq!(error.message(), "coordinator is gone");
    assert_eq!(
        error.to_string(),
        format!("coordinator is gone ({} error 6)", ERROR_DOMAIN)
    );
}

#[test]
fn named_constructors_fill_payload() {
    let error = StoreError::different_storage_exists_at_url("/tmp/app.sqlite");
    assert_eq!(error.code(), ErrorCode::DifferentStorageExistsAtUrl);
    assert_eq!(
        error.info(EXISTING_PERSISTENT_STORE_URL_KEY),
        Some(&json!("/tmp/app.sqlite"))
    );

    let error = StoreError::mapping_model_not_found("/tmp/app.sqlite", "Model", "v3");
    assert_eq!(error.code(), ErrorCode::MappingModelNotFound);
    assert_eq!(error.info(LOCAL_STORE_URL_KEY), Some(&json!("/tmp/app.sqlite")));
    assert_eq!(error.info(TARGET_MODEL_KEY), Some(&json!("Model")));
    assert_eq!(error.info(TARGET_MODEL_VERSION_KEY), Some(&json!("v3")));

    let error = StoreError::progressive_migration_required("/tmp/app.sqlite");
    assert_eq!(error.code(), ErrorCode::ProgressiveMigrationRequired);
    assert_eq!(error.info(LOCAL_STORE_URL_KEY), Some(&json!("/tmp/app.sqlite")));

    let error = StoreError::asynchronous_migration_required("/tmp/app.sqlite");
    assert_eq!(error.code(), ErrorCode::AsynchronousMigrationRequired);
    assert_eq!(error.info(LOCAL_STORE_URL_KEY), Some(&json!("/tmp/app.sqlite")));

    let error = StoreError::persistent_store_not_found("User");
    assert_eq!(error.code(), ErrorCode::PersistentStoreNotFound);
    assert_eq!(error.info(ENTITY_KEY), Some(&json!("User")));
}

#[test]
fn user_error_keeps_whole_chain() {
    let failing: anyhow::Result<()> = Err(anyhow::Error::msg("disk full"));
    let error = StoreError::from(failing.context("copying rows").unwrap_err());

    assert_eq!(error.code(), ErrorCode::User);
    assert_eq!(
        error.info(UNDERLYING_ERROR_KEY),
        Some(&json!(["copying rows", "disk full"]))
    );
}

#[test]
fn usable_as_std_error() {
    fn fail() -> anyhow::Result<()> {
        Err(StoreError::user_cancelled().into())
    }

    let error = fail().unwrap_err();
    let store_error = error.downcast_ref::<StoreError>().unwrap();

    assert_eq!(store_error.code(), ErrorCode::UserCancelled);
}

#[test]
fn serialized_with_integer_code() {
    let error = StoreError::new(42_i64).with_message("custom failure");

    let json = serde_json::to_value(&error).unwrap();
    assert_eq!(json["code"], json!(42));
    assert_eq!(json["domain"], json!(ERROR_DOMAIN));

    let restored: StoreError = serde_json::from_value(json).unwrap();
    assert_eq!(restored, error);
    assert_eq!(restored.code(), ErrorCode::Other(42));
}

#[test]
fn missing_payload_deserializes_empty() {
    let error: StoreError = serde_json::from_value(json!({
        "code": 3,
        "domain": ERROR_DOMAIN,
        "message": "no mapping",
    }))
    .unwrap();

    assert_eq!(error.code(), ErrorCode::MappingModelNotFound);
    assert!(error.user_info().is_empty());
}

#[test]
fn other_with_registered_value_is_the_registered_code() {
    assert_eq!(ErrorCode::Other(3), ErrorCode::MappingModelNotFound);
    assert_eq!(ErrorCode::Other(3).normalized(), ErrorCode::MappingModelNotFound);
    assert!(matches!(
        ErrorCode::Other(3).normalized(),
        ErrorCode::MappingModelNotFound
    ));
    assert_ne!(ErrorCode::Other(42), ErrorCode::Unknown);

    let error = StoreError::new(ErrorCode::Other(3));
    assert!(matches!(error.code(), ErrorCode::MappingModelNotFound));
    assert_eq!(
        error.message(),
        ErrorCode::MappingModelNotFound.default_message()
    );
}

#[test]
fn equal_codes_hash_equally() {
    let codes = [ErrorCode::Other(8), ErrorCode::UserCancelled]
        .into_iter()
        .collect::<HashSet<ErrorCode>>();

    assert_eq!(codes.len(), 1);
}
