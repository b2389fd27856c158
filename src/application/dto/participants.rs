use crate::application::error::{ApplicationError, ApplicationResult, FieldErrors};
use crate::domain::{
    errors::{DomainError, DomainResult},
    participant::{
        CardNumber, NewParticipant, Participant, ParticipantId, ParticipantName, PhoneNumber,
        RaffleId,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Participant as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub raffle_id: i32,
    #[serde(default)]
    pub card_number: Option<i32>,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id.into(),
            name: participant.name.into_inner(),
            phone: participant.phone.map(PhoneNumber::into_inner),
            raffle_id: participant.raffle_id.into(),
            card_number: participant.card_number.map(Into::into),
        }
    }
}

/// Request body for create and full update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCreateDto {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub raffle_id: i32,
    #[serde(default)]
    pub card_number: Option<i32>,
}

impl ParticipantCreateDto {
    pub fn into_new_participant(self) -> ApplicationResult<NewParticipant> {
        validate_fields(self.name, self.phone, self.raffle_id, self.card_number)
    }
}

/// Shape a JSON Patch document is applied to. Every field is present so that
/// `replace` works on all of them; unknown members are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParticipantPatchDto {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub raffle_id: i32,
    #[serde(default)]
    pub card_number: Option<i32>,
}

impl From<&Participant> for ParticipantPatchDto {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.as_str().to_string(),
            phone: participant.phone.as_ref().map(|p| p.as_str().to_string()),
            raffle_id: participant.raffle_id.into(),
            card_number: participant.card_number.map(Into::into),
        }
    }
}

impl ParticipantPatchDto {
    /// Validates the patched values and maps them onto the stored row.
    pub fn apply_to(self, id: ParticipantId) -> ApplicationResult<Participant> {
        validate_fields(self.name, self.phone, self.raffle_id, self.card_number)
            .map(|fields| fields.with_id(id))
    }
}

fn validate_fields(
    name: String,
    phone: Option<String>,
    raffle_id: i32,
    card_number: Option<i32>,
) -> ApplicationResult<NewParticipant> {
    let mut errors = FieldErrors::new();

    let name = check(&mut errors, "name", ParticipantName::new(name));
    let phone = check(&mut errors, "phone", PhoneNumber::parse_optional(phone));
    let raffle_id = check(&mut errors, "raffleId", RaffleId::new(raffle_id));
    let card_number = check(
        &mut errors,
        "cardNumber",
        card_number.map(CardNumber::new).transpose(),
    );

    match (name, phone, raffle_id, card_number) {
        (Some(name), Some(phone), Some(raffle_id), Some(card_number)) if errors.is_empty() => {
            Ok(NewParticipant {
                name,
                phone,
                raffle_id,
                card_number,
            })
        }
        _ => Err(ApplicationError::invalid_fields(
            "one or more validation errors occurred",
            errors,
        )),
    }
}

fn check<T>(errors: &mut FieldErrors, field: &str, result: DomainResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(DomainError::Validation(msg)) => {
            errors.insert(field.to_string(), msg);
            None
        }
        Err(other) => {
            errors.insert(field.to_string(), other.to_string());
            None
        }
    }
}
