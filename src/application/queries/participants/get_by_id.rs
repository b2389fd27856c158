use super::ParticipantQueryService;
use crate::{
    application::{
        dto::ParticipantDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::participant::ParticipantId,
};

pub struct GetParticipantByIdQuery {
    pub id: i32,
}

impl ParticipantQueryService {
    pub async fn get_participant_by_id(
        &self,
        query: GetParticipantByIdQuery,
    ) -> ApplicationResult<ParticipantDto> {
        tracing::info!(participant_id = query.id, "fetching participant by id");

        let id = ParticipantId::new(query.id)?;
        let participant = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("participant not found"))?;
        Ok(participant.into())
    }
}
