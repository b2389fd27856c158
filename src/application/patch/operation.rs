use super::{
    PatchError,
    pointer::{self, JsonPointer},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. }
            | Self::Remove { path }
            | Self::Replace { path, .. }
            | Self::Move { path, .. }
            | Self::Copy { path, .. }
            | Self::Test { path, .. } => path,
        }
    }

    pub(super) fn apply(&self, doc: &mut Value) -> Result<(), PatchError> {
        match self {
            Self::Add { path, value } => add(doc, &JsonPointer::parse(path)?, value.clone()),
            Self::Remove { path } => remove(doc, &JsonPointer::parse(path)?).map(drop),
            Self::Replace { path, value } => {
                replace(doc, &JsonPointer::parse(path)?, value.clone())
            }
            Self::Move { from, path } => {
                let from = JsonPointer::parse(from)?;
                let path = JsonPointer::parse(path)?;
                if from.is_proper_prefix_of(&path) {
                    return Err(PatchError::MoveIntoChild {
                        from: from.to_string(),
                        path: path.to_string(),
                    });
                }
                if pointer::resolve_tokens(doc, from.tokens())
                    == pointer::resolve_tokens(doc, path.tokens())
                {
                    return ensure_exists(doc, &from);
                }
                let value = remove(doc, &from)?;
                add(doc, &path, value)
            }
            Self::Copy { from, path } => {
                let from = JsonPointer::parse(from)?;
                let value = pointer::get(doc, from.tokens())
                    .cloned()
                    .ok_or_else(|| PatchError::PathNotFound(from.to_string()))?;
                add(doc, &JsonPointer::parse(path)?, value)
            }
            Self::Test { path, value } => {
                let path = JsonPointer::parse(path)?;
                let current = pointer::get(doc, path.tokens())
                    .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;
                if current == value {
                    Ok(())
                } else {
                    Err(PatchError::TestFailed(path.to_string()))
                }
            }
        }
    }
}

fn ensure_exists(doc: &Value, path: &JsonPointer) -> Result<(), PatchError> {
    pointer::get(doc, path.tokens())
        .map(|_| ())
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))
}

fn parent_mut<'a>(
    doc: &'a mut Value,
    path: &JsonPointer,
    parent: &[String],
) -> Result<&'a mut Value, PatchError> {
    pointer::get_mut(doc, parent).ok_or_else(|| PatchError::PathNotFound(path.to_string()))
}

fn add(doc: &mut Value, path: &JsonPointer, value: Value) -> Result<(), PatchError> {
    let Some((parent, last)) = path.split_last() else {
        *doc = value;
        return Ok(());
    };

    match parent_mut(doc, path, parent)? {
        Value::Object(map) => {
            let key = pointer::resolve_key(map, last).unwrap_or_else(|| last.to_string());
            map.insert(key, value);
            Ok(())
        }
        Value::Array(items) => {
            let index = pointer::parse_index(last, items.len(), true)?;
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn remove(doc: &mut Value, path: &JsonPointer) -> Result<Value, PatchError> {
    let Some((parent, last)) = path.split_last() else {
        return Err(PatchError::RootRemoval);
    };

    match parent_mut(doc, path, parent)? {
        Value::Object(map) => pointer::resolve_key(map, last)
            .and_then(|key| map.remove(&key))
            .ok_or_else(|| PatchError::PathNotFound(path.to_string())),
        Value::Array(items) => {
            let index = pointer::parse_index(last, items.len(), false)?;
            Ok(items.remove(index))
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn replace(doc: &mut Value, path: &JsonPointer, value: Value) -> Result<(), PatchError> {
    if path.is_root() {
        *doc = value;
        return Ok(());
    }

    let slot = pointer::get_mut(doc, path.tokens())
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;
    *slot = value;
    Ok(())
}
