// src/application/patch/pointer.rs
use super::PatchError;
use serde_json::{Map, Value};
use std::fmt;

/// Parsed JSON Pointer (RFC 6901). The empty pointer addresses the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPointer {
    raw: String,
    tokens: Vec<String>,
}

impl JsonPointer {
    pub fn parse(raw: &str) -> Result<Self, PatchError> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                tokens: Vec::new(),
            });
        }

        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatchError::InvalidPointer(raw.to_string()));
        };

        let tokens = rest
            .split('/')
            .map(|segment| unescape(segment).ok_or_else(|| PatchError::InvalidPointer(raw.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_string(),
            tokens,
        })
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Splits into the parent tokens and the final reference token.
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        self.tokens
            .split_last()
            .map(|(last, parent)| (parent, last.as_str()))
    }

    /// True when `other` points strictly inside the location addressed by `self`.
    pub fn is_proper_prefix_of(&self, other: &Self) -> bool {
        self.tokens.len() < other.tokens.len()
            && self
                .tokens
                .iter()
                .zip(other.tokens.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn unescape(segment: &str) -> Option<String> {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Finds the member addressed by `token`: exact match first, then an ASCII
/// case-insensitive one.
pub(super) fn resolve_key(map: &Map<String, Value>, token: &str) -> Option<String> {
    if map.contains_key(token) {
        return Some(token.to_string());
    }
    map.keys()
        .find(|key| key.eq_ignore_ascii_case(token))
        .cloned()
}

/// Rewrites `tokens` with the member names they resolve to in `root`.
/// Tokens past the first unresolvable one are kept verbatim.
pub(super) fn resolve_tokens(root: &Value, tokens: &[String]) -> Vec<String> {
    let mut resolved = Vec::with_capacity(tokens.len());
    let mut current = Some(root);
    for token in tokens {
        let (name, next) = match current {
            Some(Value::Object(map)) => match resolve_key(map, token) {
                Some(key) => {
                    let next = map.get(&key);
                    (key, next)
                }
                None => (token.clone(), None),
            },
            Some(Value::Array(items)) => (
                token.clone(),
                parse_index(token, items.len(), false)
                    .ok()
                    .and_then(|index| items.get(index)),
            ),
            _ => (token.clone(), None),
        };
        resolved.push(name);
        current = next;
    }
    resolved
}

/// Parses an array index. Only canonical decimal forms are accepted; `-`
/// means "one past the end" when `allow_end` is set.
pub(super) fn parse_index(token: &str, len: usize, allow_end: bool) -> Result<usize, PatchError> {
    if token == "-" {
        return if allow_end {
            Ok(len)
        } else {
            Err(PatchError::IndexOutOfBounds(token.to_string()))
        };
    }

    let canonical = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !canonical {
        return Err(PatchError::InvalidIndex(token.to_string()));
    }

    let index: usize = token
        .parse()
        .map_err(|_| PatchError::InvalidIndex(token.to_string()))?;
    let in_bounds = if allow_end { index <= len } else { index < len };
    if !in_bounds {
        return Err(PatchError::IndexOutOfBounds(token.to_string()));
    }
    Ok(index)
}

pub(super) fn get<'a>(root: &'a Value, tokens: &[String]) -> Option<&'a Value> {
    tokens.iter().try_fold(root, |current, token| match current {
        Value::Object(map) => resolve_key(map, token).and_then(|key| map.get(&key)),
        Value::Array(items) => parse_index(token, items.len(), false)
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    })
}

pub(super) fn get_mut<'a>(root: &'a mut Value, tokens: &[String]) -> Option<&'a mut Value> {
    let mut current = root;
    for token in tokens {
        current = match current {
            Value::Object(map) => {
                let key = resolve_key(map, token)?;
                map.get_mut(&key)?
            }
            Value::Array(items) => {
                let index = parse_index(token, items.len(), false).ok()?;
                items.get_mut(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}
