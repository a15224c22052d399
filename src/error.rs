use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Domain every [`StoreError`] built by this crate is reported under
pub const ERROR_DOMAIN: &str = "migration_outcome.store";

pub const EXISTING_PERSISTENT_STORE_URL_KEY: &str = "existing_persistent_store_url";
pub const LOCAL_STORE_URL_KEY: &str = "local_store_url";
pub const TARGET_MODEL_KEY: &str = "target_model";
pub const TARGET_MODEL_VERSION_KEY: &str = "target_model_version";
pub const UNDERLYING_ERROR_KEY: &str = "underlying_error";
pub const ENTITY_KEY: &str = "entity";

/// Diagnostic payload attached to a [`StoreError`]
pub type UserInfo = BTreeMap<String, Value>;

/// Codes compare and hash by [`ErrorCode::value`], so `Other(3)`
/// is the same code as `MappingModelNotFound`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ErrorCode {
    Unknown,
    /// A store of a different type already lives at the requested location
    DifferentStorageExistsAtUrl,
    /// No mapping model between the store's version and the target version
    MappingModelNotFound,
    /// More than one step is needed and progressive migrations are disabled
    ProgressiveMigrationRequired,
    /// The store can only be migrated asynchronously
    AsynchronousMigrationRequired,
    Internal,
    /// Raised from user code running inside a migration
    User,
    UserCancelled,
    PersistentStoreNotFound,
    /// A code not known to this registry
    Other(i64),
}

impl ErrorCode {
    pub fn value(&self) -> i64 {
        match self {
            ErrorCode::Unknown => 1,
            ErrorCode::DifferentStorageExistsAtUrl => 2,
            ErrorCode::MappingModelNotFound => 3,
            ErrorCode::ProgressiveMigrationRequired => 4,
            ErrorCode::AsynchronousMigrationRequired => 5,
            ErrorCode::Internal => 6,
            ErrorCode::User => 7,
            ErrorCode::UserCancelled => 8,
            ErrorCode::PersistentStoreNotFound => 9,
            ErrorCode::Other(value) => *value,
        }
    }

    /// The registered variant for this code's value
    pub fn normalized(&self) -> Self {
        ErrorCode::from(self.value())
    }

    pub fn default_message(&self) -> String {
        match self.normalized() {
            ErrorCode::Unknown => "An unknown error occurred.".to_string(),
            ErrorCode::DifferentStorageExistsAtUrl => {
                "A store of a different type already exists at the requested location.".to_string()
            }
            ErrorCode::MappingModelNotFound => {
                "No mapping model was found to migrate the store to the target version."
                    .to_string()
            }
            ErrorCode::ProgressiveMigrationRequired => {
                "The store needs a multi-step migration but progressive migrations are disabled."
                    .to_string()
            }
            ErrorCode::AsynchronousMigrationRequired => {
                "The store has to be migrated asynchronously.".to_string()
            }
            ErrorCode::Internal => "An internal error occurred.".to_string(),
            ErrorCode::User => "An error was returned by user code.".to_string(),
            ErrorCode::UserCancelled => "The operation was cancelled by the user.".to_string(),
            ErrorCode::PersistentStoreNotFound => {
                "No persistent store was found for the requested entity.".to_string()
            }
            ErrorCode::Other(value) => format!("Unregistered error code {}.", value),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(value: i64) -> Self {
        match value {
            1 => ErrorCode::Unknown,
            2 => ErrorCode::DifferentStorageExistsAtUrl,
            3 => ErrorCode::MappingModelNotFound,
            4 => ErrorCode::ProgressiveMigrationRequired,
            5 => ErrorCode::AsynchronousMigrationRequired,
            6 => ErrorCode::Internal,
            7 => ErrorCode::User,
            8 => ErrorCode::UserCancelled,
            9 => ErrorCode::PersistentStoreNotFound,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.value()
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An inspectable error a failed migration carries:
/// a code, the domain it belongs to, a message and a diagnostic payload
#[derive(Error, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[error("{message} ({domain} error {code})")]
pub struct StoreError {
    code: ErrorCode,
    domain: String,
    message: String,
    #[serde(default)]
    user_info: UserInfo,
}

impl StoreError {
    pub fn new(code: impl Into<ErrorCode>) -> Self {
        Self::with_info(code, UserInfo::new())
    }

    pub fn with_info(code: impl Into<ErrorCode>, user_info: UserInfo) -> Self {
        let code = code.into().normalized();

        StoreError {
            code,
            domain: ERROR_DOMAIN.to_string(),
            message: code.default_message(),
            user_info,
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        StoreError {
            message: message.into(),
            ..self
        }
    }

    pub fn different_storage_exists_at_url(existing_url: impl Into<String>) -> Self {
        Self::with_info(
            ErrorCode::DifferentStorageExistsAtUrl,
            info([(EXISTING_PERSISTENT_STORE_URL_KEY, existing_url.into())]),
        )
    }

    pub fn mapping_model_not_found(
        local_store_url: impl Into<String>,
        target_model: impl Into<String>,
        target_model_version: impl Into<String>,
    ) -> Self {
        Self::with_info(
            ErrorCode::MappingModelNotFound,
            info([
                (LOCAL_STORE_URL_KEY, local_store_url.into()),
                (TARGET_MODEL_KEY, target_model.into()),
                (TARGET_MODEL_VERSION_KEY, target_model_version.into()),
            ]),
        )
    }

    pub fn progressive_migration_required(local_store_url: impl Into<String>) -> Self {
        Self::with_info(
            ErrorCode::ProgressiveMigrationRequired,
            info([(LOCAL_STORE_URL_KEY, local_store_url.into())]),
        )
    }

    pub fn asynchronous_migration_required(local_store_url: impl Into<String>) -> Self {
        Self::with_info(
            ErrorCode::AsynchronousMigrationRequired,
            info([(LOCAL_STORE_URL_KEY, local_store_url.into())]),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal).with_message(message)
    }

    /// Wraps an error returned by user code. The whole error chain
    /// is kept under [`UNDERLYING_ERROR_KEY`], outermost first
    pub fn user(error: anyhow::Error) -> Self {
        let chain = error
            .chain()
            .map(|cause| Value::String(cause.to_string()))
            .collect::<Vec<Value>>();

        let mut user_info = UserInfo::new();
        user_info.insert(UNDERLYING_ERROR_KEY.to_string(), Value::Array(chain));

        Self::with_info(ErrorCode::User, user_info)
    }

    pub fn user_cancelled() -> Self {
        Self::new(ErrorCode::UserCancelled)
    }

    pub fn persistent_store_not_found(entity: impl Into<String>) -> Self {
        Self::with_info(
            ErrorCode::PersistentStoreNotFound,
            info([(ENTITY_KEY, entity.into())]),
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.user_info
    }

    pub fn info(&self, key: &str) -> Option<&Value> {
        self.user_info.get(key)
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(error: anyhow::Error) -> Self {
        StoreError::user(error)
    }
}

fn info<const N: usize>(entries: [(&str, String); N]) -> UserInfo {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect()
}
