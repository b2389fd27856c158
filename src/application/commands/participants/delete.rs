use super::ParticipantCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        policy::{AUTHORIZED, ensure_policy},
    },
    domain::participant::ParticipantId,
};

pub struct DeleteParticipantCommand {
    pub id: i32,
}

impl ParticipantCommandService {
    pub async fn delete_participant(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteParticipantCommand,
    ) -> ApplicationResult<()> {
        ensure_policy(actor, &AUTHORIZED)?;

        let id = ParticipantId::new(command.id)?;
        if !self.read_repo.exists(id).await? {
            return Err(ApplicationError::not_found(
                "participant was not found in the database",
            ));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(participant_id = %id, actor = %actor.subject, "participant deleted");
        Ok(())
    }
}
