use super::ParticipantCommandService;
use crate::{
    application::{
        dto::{ParticipantCreateDto, ParticipantDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::participant::ParticipantId,
};

pub struct CreateParticipantCommand {
    pub payload: ParticipantCreateDto,
}

impl ParticipantCommandService {
    /// Registers a participant. Open to anonymous callers.
    ///
    /// The payload is validated first. A participant whose id equals the
    /// requested raffle id then blocks the registration.
    pub async fn create_participant(
        &self,
        command: CreateParticipantCommand,
    ) -> ApplicationResult<ParticipantDto> {
        let new_participant = command.payload.into_new_participant()?;

        let raffle_id = i32::from(new_participant.raffle_id);
        if self.read_repo.exists(ParticipantId::new(raffle_id)?).await? {
            return Err(ApplicationError::validation(format!(
                "a raffle with id {raffle_id} already exists"
            )));
        }

        let created = self.write_repo.insert(new_participant).await?;
        tracing::info!(participant_id = %created.id, raffle_id = %created.raffle_id, "participant registered");
        Ok(created.into())
    }
}
