// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_participant;

pub use error::map_sqlx;
pub use postgres_participant::{
    PostgresParticipantReadRepository, PostgresParticipantWriteRepository,
};
