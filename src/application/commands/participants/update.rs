use super::ParticipantCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ParticipantCreateDto},
        error::{ApplicationError, ApplicationResult},
        policy::{AUTHORIZED, ensure_policy},
    },
    domain::participant::ParticipantId,
};

pub struct UpdateParticipantCommand {
    pub id: i32,
    pub payload: ParticipantCreateDto,
}

impl ParticipantCommandService {
    /// Replaces every field of an existing participant. The id always comes
    /// from the route, and the payload is validated before the lookup.
    pub async fn update_participant(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateParticipantCommand,
    ) -> ApplicationResult<()> {
        ensure_policy(actor, &AUTHORIZED)?;

        let id = ParticipantId::new(command.id)?;
        let participant = command.payload.into_new_participant()?.with_id(id);
        if !self.read_repo.exists(id).await? {
            return Err(ApplicationError::not_found("participant does not exist"));
        }

        self.write_repo.update(participant).await?;
        tracing::info!(participant_id = %id, actor = %actor.subject, "participant replaced");
        Ok(())
    }
}
