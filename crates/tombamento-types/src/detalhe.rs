//! Detalhe (free-form detail record) types

use crate::error::{Result, StoreError};
use crate::tombamento::code_of;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Detail record keyed by the same code as a tombamento.
///
/// Everything besides `code` is kept verbatim, in the order the client sent
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detalhe {
    pub code: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Detalhe {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

impl TryFrom<Value> for Detalhe {
    type Error = StoreError;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(StoreError::MissingCode);
        };

        let code = fields
            .remove("code")
            .as_ref()
            .and_then(code_of)
            .map(str::to_string)
            .ok_or(StoreError::MissingCode)?;

        Ok(Self { code, fields })
    }
}

/// Parse the body of `POST /detalhes/batch`: `{ "detalhes": [...] }`.
///
/// Stricter than a plain array check: every entry must carry a code, and one
/// entry without it fails the whole batch with `MissingCode`. Nothing is
/// applied until all entries have been validated, so codeless records never
/// reach the store.
pub fn parse_batch(body: Value) -> Result<Vec<Detalhe>> {
    let entries = match body {
        Value::Object(mut map) => match map.remove("detalhes") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(StoreError::MissingBatch),
        },
        _ => return Err(StoreError::MissingBatch),
    };

    entries.into_iter().map(Detalhe::try_from).collect()
}
