use crate::domain::model::Project;
use crate::domain::validation::{extract_project_data, validate_jsonld_structure};
use crate::store::ProjectStore;
use crate::utils::error::TrackerError;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub data: Project,
}

/// Uniform failure shape: every error response carries {message, errors}.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub errors: Vec<String>,
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (message, errors) = match self {
            TrackerError::InvalidJson => (
                "Invalid JSON format".to_string(),
                vec!["Request body must be valid JSON".to_string()],
            ),
            TrackerError::InvalidDocument { errors } => {
                ("Validation failed or invalid JSON-LD".to_string(), errors)
            }
            TrackerError::InvalidProject { reason } => {
                ("Validation failed".to_string(), vec![reason])
            }
        };

        (StatusCode::BAD_REQUEST, Json(ErrorBody { message, errors })).into_response()
    }
}

pub fn router(store: ProjectStore) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/projects", post(submit_project).get(list_projects))
        .layer(cors_layer())
        .with_state(store)
}

// All origins, mirrored so credentials stay allowed; GET/POST with
// Content-Type only.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

async fn health() -> Json<MessageBody> {
    Json(MessageBody {
        message: "Impact Project Tracker API is running".to_string(),
    })
}

async fn submit_project(
    State(store): State<ProjectStore>,
    body: String,
) -> std::result::Result<(StatusCode, Json<SubmitResponse>), TrackerError> {
    let document: Value = serde_json::from_str(&body).map_err(|_| TrackerError::InvalidJson)?;

    let errors = validate_jsonld_structure(&document);
    if !errors.is_empty() {
        tracing::debug!("Rejected submission with {} validation errors", errors.len());
        return Err(TrackerError::InvalidDocument { errors });
    }

    let draft = extract_project_data(&document);
    let project = Project::new(&draft.project_name, &draft.status)?;

    tracing::info!("Accepted project: {} ({})", project.project_name, project.status);
    store.append(project.clone());

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Project submitted successfully".to_string(),
            data: project,
        }),
    ))
}

async fn list_projects(State(store): State<ProjectStore>) -> Json<Vec<Project>> {
    Json(store.list())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_variant_maps_to_400() {
        let cases = vec![
            TrackerError::InvalidJson,
            TrackerError::InvalidDocument {
                errors: vec!["status is required".to_string()],
            },
            TrackerError::InvalidProject {
                reason: "projectName must be a non-empty string".to_string(),
            },
        ];

        for error in cases {
            assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
