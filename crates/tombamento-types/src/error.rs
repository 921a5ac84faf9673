//! Error types for record validation

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `code` absent, null, not a string, or empty
    #[error("Código é obrigatório")]
    MissingCode,

    /// Batch body without a `detalhes` array
    #[error("Array de detalhes é obrigatório")]
    MissingBatch,
}
