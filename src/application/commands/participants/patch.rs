use super::ParticipantCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ParticipantPatchDto},
        error::{ApplicationError, ApplicationResult},
        patch::PatchDocument,
        policy::{AUTHORIZED, ensure_policy},
    },
    domain::participant::ParticipantId,
};

pub struct PatchParticipantCommand {
    pub id: i32,
    pub document: PatchDocument,
}

impl ParticipantCommandService {
    /// Loads the row, applies the patch to its patch view, re-validates and
    /// writes the result back.
    pub async fn patch_participant(
        &self,
        actor: &AuthenticatedUser,
        command: PatchParticipantCommand,
    ) -> ApplicationResult<()> {
        ensure_policy(actor, &AUTHORIZED)?;

        let id = ParticipantId::new(command.id)?;
        let stored = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("participant not found"))?;

        let view = ParticipantPatchDto::from(&stored);
        let patched = command.document.apply_to(&view)?;
        let updated = patched.apply_to(id)?;

        if updated == stored {
            tracing::debug!(participant_id = %id, "patch produced no changes");
            return Ok(());
        }

        self.write_repo.update(updated).await?;
        tracing::info!(
            participant_id = %id,
            actor = %actor.subject,
            operations = command.document.operations().len(),
            "participant patched"
        );
        Ok(())
    }
}
