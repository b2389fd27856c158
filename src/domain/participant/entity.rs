// src/domain/participant/entity.rs
use crate::domain::participant::value_objects::{
    CardNumber, ParticipantId, ParticipantName, PhoneNumber, RaffleId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: ParticipantName,
    pub phone: Option<PhoneNumber>,
    pub raffle_id: RaffleId,
    pub card_number: Option<CardNumber>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    pub name: ParticipantName,
    pub phone: Option<PhoneNumber>,
    pub raffle_id: RaffleId,
    pub card_number: Option<CardNumber>,
}

impl NewParticipant {
    pub fn with_id(self, id: ParticipantId) -> Participant {
        Participant {
            id,
            name: self.name,
            phone: self.phone,
            raffle_id: self.raffle_id,
            card_number: self.card_number,
        }
    }
}
