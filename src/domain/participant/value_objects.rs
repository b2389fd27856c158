use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_NAME_LEN: usize = 100;
pub const MIN_CARD: i32 = 1;
pub const MAX_CARD: i32 = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(i32);

impl ParticipantId {
    pub fn new(id: i32) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "participant id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ParticipantId> for i32 {
    fn from(value: ParticipantId) -> Self {
        value.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaffleId(i32);

impl RaffleId {
    pub fn new(id: i32) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("raffle id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RaffleId> for i32 {
    fn from(value: RaffleId) -> Self {
        value.0
    }
}

impl fmt::Display for RaffleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantName(String);

impl ParticipantName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_NAME_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact phone. Digits, spaces, `+` and `-` are accepted; at least seven
/// digits are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let len = value.chars().count();
        if !(7..=20).contains(&len) {
            return Err(DomainError::Validation(
                "phone must be between 7 and 20 characters long".into(),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-'))
        {
            return Err(DomainError::Validation(
                "phone may only contain digits, spaces, '+' and '-'".into(),
            ));
        }
        if value.chars().filter(char::is_ascii_digit).count() < 7 {
            return Err(DomainError::Validation(
                "phone must contain at least 7 digits".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Blank input is treated as "no phone".
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(raw) if !raw.trim().is_empty() => Self::new(raw).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Lottery card picked by the participant, one of the 54 cards of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardNumber(i32);

impl CardNumber {
    pub fn new(value: i32) -> DomainResult<Self> {
        if (MIN_CARD..=MAX_CARD).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "card number must be between {MIN_CARD} and {MAX_CARD}"
            )))
        }
    }
}

impl From<CardNumber> for i32 {
    fn from(value: CardNumber) -> Self {
        value.0
    }
}
