// src/presentation/http/controllers/participants.rs
use crate::application::{
    commands::participants::{
        CreateParticipantCommand, DeleteParticipantCommand, PatchParticipantCommand,
        UpdateParticipantCommand,
    },
    dto::{ParticipantCreateDto, ParticipantDto},
    patch::PatchDocument,
    queries::participants::GetParticipantByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};

pub const PARTICIPANTS_PATH: &str = "/api/participantes";

/// Location of a single participant, as sent in `201 Created` responses.
pub fn participant_location(id: i32) -> String {
    format!("{PARTICIPANTS_PATH}/{id}")
}

#[utoipa::path(
    get,
    path = "/api/participantes",
    responses(
        (status = 200, description = "Every registered participant.", body = [ParticipantDto]),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Token lacks the required capability.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Participants"
)]
pub async fn list_participants(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ParticipantDto>>> {
    state
        .services
        .participant_queries
        .list_participants(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/participantes/{id}",
    params(("id" = i32, Path, description = "Participant id")),
    responses(
        (status = 200, description = "The participant.", body = ParticipantDto),
        (status = 404, description = "No participant with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Participants"
)]
pub async fn get_participant(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i32>,
) -> HttpResult<Json<ParticipantDto>> {
    state
        .services
        .participant_queries
        .get_participant_by_id(GetParticipantByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/participantes",
    request_body = ParticipantCreateDto,
    responses(
        (status = 201, description = "Participant registered.", body = ParticipantDto,
            headers(("Location" = String, description = "URL of the new participant"))),
        (status = 400, description = "Invalid payload or raffle already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Participants"
)]
pub async fn create_participant(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<ParticipantCreateDto>,
) -> HttpResult<impl IntoResponse> {
    let created = state
        .services
        .participant_commands
        .create_participant(CreateParticipantCommand { payload })
        .await
        .into_http()?;

    let location = participant_location(created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/api/participantes/{id}",
    params(("id" = i32, Path, description = "Participant id")),
    request_body = ParticipantCreateDto,
    responses(
        (status = 204, description = "Participant replaced."),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Token lacks the required capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No participant with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Participants"
)]
pub async fn update_participant(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<ParticipantCreateDto>,
) -> HttpResult<StatusCode> {
    state
        .services
        .participant_commands
        .update_participant(&user, UpdateParticipantCommand { id, payload })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/participantes/{id}",
    params(("id" = i32, Path, description = "Participant id")),
    request_body(
        content = [crate::presentation::http::openapi::PatchOperationDoc],
        content_type = "application/json-patch+json",
        description = "RFC 6902 JSON Patch document applied to the participant."
    ),
    responses(
        (status = 204, description = "Participant patched."),
        (status = 400, description = "Missing, malformed or invalid patch.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Token lacks the required capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No participant with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Participants"
)]
pub async fn patch_participant(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i32>,
    JsonBody(document): JsonBody<PatchDocument>,
) -> HttpResult<StatusCode> {
    state
        .services
        .participant_commands
        .patch_participant(&user, PatchParticipantCommand { id, document })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/participantes/{id}",
    params(("id" = i32, Path, description = "Participant id")),
    responses(
        (status = 200, description = "Participant deleted."),
        (status = 401, description = "Missing or invalid bearer token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Token lacks the required capability.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No participant with that id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Participants"
)]
pub async fn delete_participant(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i32>,
) -> HttpResult<StatusCode> {
    state
        .services
        .participant_commands
        .delete_participant(&user, DeleteParticipantCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}
