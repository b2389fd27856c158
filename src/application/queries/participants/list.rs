use super::ParticipantQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ParticipantDto},
    error::ApplicationResult,
    policy::{AUTHORIZED, ensure_policy},
};

impl ParticipantQueryService {
    pub async fn list_participants(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ParticipantDto>> {
        ensure_policy(actor, &AUTHORIZED)?;

        tracing::info!("listing participants");
        let participants = self.read_repo.list().await?;
        Ok(participants.into_iter().map(ParticipantDto::from).collect())
    }
}
