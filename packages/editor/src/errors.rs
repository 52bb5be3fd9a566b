//! Error types for the editor

use crate::store::StoreError;
use pagecraft_schema::SchemaError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("document schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("no document is loaded")]
    NoDocument,
}
