use crate::domain::errors::DomainResult;
use crate::domain::participant::entity::{NewParticipant, Participant};
use crate::domain::participant::value_objects::ParticipantId;
use async_trait::async_trait;

#[async_trait]
pub trait ParticipantWriteRepository: Send + Sync {
    async fn insert(&self, participant: NewParticipant) -> DomainResult<Participant>;
    /// Replaces every column of the row identified by `participant.id`.
    async fn update(&self, participant: Participant) -> DomainResult<Participant>;
    async fn delete(&self, id: ParticipantId) -> DomainResult<()>;
}

#[async_trait]
pub trait ParticipantReadRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Participant>>;
    async fn find_by_id(&self, id: ParticipantId) -> DomainResult<Option<Participant>>;
    async fn exists(&self, id: ParticipantId) -> DomainResult<bool>;
}
