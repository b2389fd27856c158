// src/infrastructure/repositories/postgres_participant.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::participant::{
    CardNumber, NewParticipant, Participant, ParticipantId, ParticipantName,
    ParticipantReadRepository, ParticipantWriteRepository, PhoneNumber, RaffleId,
};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

const PARTICIPANT_COLUMNS: &str = "id, name, phone, raffle_id, card_number";

#[derive(Clone)]
pub struct PostgresParticipantWriteRepository {
    pool: PgPool,
}

impl PostgresParticipantWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresParticipantReadRepository {
    pool: PgPool,
}

impl PostgresParticipantReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ParticipantRow {
    id: i32,
    name: String,
    phone: Option<String>,
    raffle_id: i32,
    card_number: Option<i32>,
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = DomainError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ParticipantId::new(row.id)?,
            name: ParticipantName::new(row.name)?,
            phone: PhoneNumber::parse_optional(row.phone)?,
            raffle_id: RaffleId::new(row.raffle_id)?,
            card_number: row.card_number.map(CardNumber::new).transpose()?,
        })
    }
}

#[async_trait]
impl ParticipantWriteRepository for PostgresParticipantWriteRepository {
    async fn insert(&self, participant: NewParticipant) -> DomainResult<Participant> {
        let NewParticipant {
            name,
            phone,
            raffle_id,
            card_number,
        } = participant;

        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "INSERT INTO participants (name, phone, raffle_id, card_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {PARTICIPANT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(phone.as_ref().map(PhoneNumber::as_str))
        .bind(i32::from(raffle_id))
        .bind(card_number.map(i32::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Participant::try_from(row)
    }

    async fn update(&self, participant: Participant) -> DomainResult<Participant> {
        let Participant {
            id,
            name,
            phone,
            raffle_id,
            card_number,
        } = participant;

        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "UPDATE participants
             SET name = $1, phone = $2, raffle_id = $3, card_number = $4
             WHERE id = $5
             RETURNING {PARTICIPANT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(phone.as_ref().map(PhoneNumber::as_str))
        .bind(i32::from(raffle_id))
        .bind(card_number.map(i32::from))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("participant not found".into()))?;

        Participant::try_from(row)
    }

    async fn delete(&self, id: ParticipantId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(i32::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("participant not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ParticipantReadRepository for PostgresParticipantReadRepository {
    async fn list(&self) -> DomainResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Participant::try_from).collect()
    }

    async fn find_by_id(&self, id: ParticipantId) -> DomainResult<Option<Participant>> {
        let row = sqlx::query_as::<_, ParticipantRow>(&format!(
            "SELECT {PARTICIPANT_COLUMNS} FROM participants WHERE id = $1"
        ))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Participant::try_from).transpose()
    }

    async fn exists(&self, id: ParticipantId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM participants WHERE id = $1)")
            .bind(i32::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
