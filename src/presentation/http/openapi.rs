// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// One RFC 6902 operation. Documentation only: requests are decoded into
/// [`crate::application::patch::PatchOperation`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"op": "replace", "path": "/name", "value": "Lupita"}))]
pub struct PatchOperationDoc {
    /// `add`, `remove`, `replace`, `move`, `copy` or `test`.
    pub op: String,
    pub path: String,
    /// Source pointer for `move` and `copy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::participants::list_participants,
        crate::presentation::http::controllers::participants::get_participant,
        crate::presentation::http::controllers::participants::create_participant,
        crate::presentation::http::controllers::participants::update_participant,
        crate::presentation::http::controllers::participants::patch_participant,
        crate::presentation::http::controllers::participants::delete_participant,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            PatchOperationDoc,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::ParticipantDto,
            crate::application::dto::ParticipantCreateDto
        )
    ),
    tags(
        (name = "Participants", description = "Raffle participant endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Loteria API",
        description = "Participant registry for lotería raffles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and ReDoc at `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` and returns
/// the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let document = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(output_path)
}
