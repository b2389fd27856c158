mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetParticipantByIdQuery;
pub use service::ParticipantQueryService;
