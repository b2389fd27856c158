use std::sync::Arc;

use crate::domain::participant::ParticipantReadRepository;

pub struct ParticipantQueryService {
    pub(super) read_repo: Arc<dyn ParticipantReadRepository>,
}

impl ParticipantQueryService {
    pub fn new(read_repo: Arc<dyn ParticipantReadRepository>) -> Self {
        Self { read_repo }
    }
}
