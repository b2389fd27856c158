pub mod auth;
pub mod participants;

pub use auth::{AuthTokenDto, AuthenticatedUser, Capability, TokenSubject};
pub use participants::{ParticipantCreateDto, ParticipantDto, ParticipantPatchDto};
