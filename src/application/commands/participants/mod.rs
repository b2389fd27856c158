// src/application/commands/participants/mod.rs
mod create;
mod delete;
mod patch;
mod service;
mod update;

pub use create::CreateParticipantCommand;
pub use delete::DeleteParticipantCommand;
pub use patch::PatchParticipantCommand;
pub use service::ParticipantCommandService;
pub use update::UpdateParticipantCommand;
