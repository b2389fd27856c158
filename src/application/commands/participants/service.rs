// src/application/commands/participants/service.rs
use std::sync::Arc;

use crate::domain::participant::{ParticipantReadRepository, ParticipantWriteRepository};

pub struct ParticipantCommandService {
    pub(super) write_repo: Arc<dyn ParticipantWriteRepository>,
    pub(super) read_repo: Arc<dyn ParticipantReadRepository>,
}

impl ParticipantCommandService {
    pub fn new(
        write_repo: Arc<dyn ParticipantWriteRepository>,
        read_repo: Arc<dyn ParticipantReadRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
        }
    }
}
