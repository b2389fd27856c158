pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewParticipant, Participant};
pub use repository::{ParticipantReadRepository, ParticipantWriteRepository};
pub use value_objects::{CardNumber, ParticipantId, ParticipantName, PhoneNumber, RaffleId};
