//! JSON Patch (RFC 6902) documents applied to `serde_json` values and to any
//! DTO that round-trips through JSON.
//!
//! Object members are matched exactly first and then case-insensitively, so
//! clients may address `raffleId` as `/RaffleId`. Application is atomic: when
//! an operation fails the target is left untouched.

mod operation;
mod pointer;

pub use operation::PatchOperation;
pub use pointer::JsonPointer;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("invalid JSON pointer '{0}'")]
    InvalidPointer(String),
    #[error("invalid array index '{0}'")]
    InvalidIndex(String),
    #[error("array index '{0}' is out of bounds")]
    IndexOutOfBounds(String),
    #[error("target location '{0}' does not exist")]
    PathNotFound(String),
    #[error("test failed at '{0}'")]
    TestFailed(String),
    #[error("cannot move '{from}' into its own child '{path}'")]
    MoveIntoChild { from: String, path: String },
    #[error("the document root cannot be removed")]
    RootRemoval,
    #[error("patched document does not match the target shape: {0}")]
    Type(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

impl PatchDocument {
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Applies every operation in order. On error `target` is unchanged.
    pub fn apply(&self, target: &mut Value) -> Result<(), PatchError> {
        let mut working = target.clone();
        for operation in &self.0 {
            operation.apply(&mut working)?;
        }
        *target = working;
        Ok(())
    }

    /// Serialises `target`, patches the JSON and deserialises the result back
    /// into `T`.
    pub fn apply_to<T>(&self, target: &T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut value =
            serde_json::to_value(target).map_err(|err| PatchError::Type(err.to_string()))?;
        self.apply(&mut value)?;
        serde_json::from_value(value).map_err(|err| PatchError::Type(err.to_string()))
    }
}
