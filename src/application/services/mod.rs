// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::participants::ParticipantCommandService, ports::security::TokenManager,
        queries::participants::ParticipantQueryService,
    },
    domain::participant::{ParticipantReadRepository, ParticipantWriteRepository},
};

pub struct ApplicationServices {
    pub participant_commands: Arc<ParticipantCommandService>,
    pub participant_queries: Arc<ParticipantQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        participant_read_repo: Arc<dyn ParticipantReadRepository>,
        participant_write_repo: Arc<dyn ParticipantWriteRepository>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let participant_commands = Arc::new(ParticipantCommandService::new(
            Arc::clone(&participant_write_repo),
            Arc::clone(&participant_read_repo),
        ));
        let participant_queries = Arc::new(ParticipantQueryService::new(Arc::clone(
            &participant_read_repo,
        )));

        Self {
            participant_commands,
            participant_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
