//! Tombamento (asset tag) types

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code of a tombamento. Opaque: no enumeration of valid values.
pub type Status = i64;

/// Asset tag identified by `code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tombamento {
    pub code: String,
    #[serde(default)]
    pub status: Status,
}

impl Tombamento {
    pub fn new(code: impl Into<String>, status: Status) -> Self {
        Self {
            code: code.into(),
            status,
        }
    }
}

/// Body of `POST /tombamentos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TombamentoUpsert {
    #[serde(default)]
    pub code: Option<Value>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl TombamentoUpsert {
    /// Validate the request into a record. A missing status becomes 0.
    pub fn into_record(self) -> Result<Tombamento> {
        let code = self
            .code
            .as_ref()
            .and_then(code_of)
            .ok_or(StoreError::MissingCode)?;

        Ok(Tombamento::new(code, self.status.unwrap_or(0)))
    }
}

/// Body of `PUT /tombamentos/:code`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusUpdate {
    #[serde(default)]
    pub status: Option<Status>,
}

impl StatusUpdate {
    pub fn status(&self) -> Status {
        self.status.unwrap_or(0)
    }
}

/// Extract a usable code: a non-empty JSON string.
pub fn code_of(value: &Value) -> Option<&str> {
    value.as_str().filter(|code| !code.is_empty())
}
