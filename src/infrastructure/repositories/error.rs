use crate::domain::errors::DomainError;

const CNT_PARTICIPANT_RAFFLE_POSITIVE: &str = "participants_raffle_id_positive_chk";
const CNT_PARTICIPANT_CARD_RANGE: &str = "participants_card_number_range_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_PARTICIPANT_RAFFLE_POSITIVE => {
                        DomainError::Validation("raffle id must be positive".into())
                    }
                    CNT_PARTICIPANT_CARD_RANGE => {
                        DomainError::Validation("card number must be between 1 and 54".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
