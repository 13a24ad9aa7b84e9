use axum::{
	Json, Router,
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;
use mesopust_domain::{EntityType, NavigationTarget};
use mesopust_service::{
	EntityRequest, EntityResponse, Error as ServiceError, NavigateRequest, SearchRequest,
	SearchResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/navigate", post(navigate))
		.route("/v1/entities/{entity_type}/{id}", get(entity))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Json<SearchResponse> {
	Json(state.service.search(payload).await)
}

async fn navigate(
	State(state): State<AppState>,
	Json(payload): Json<NavigateRequest>,
) -> Json<NavigationTarget> {
	Json(state.service.navigate(payload))
}

async fn entity(
	State(state): State<AppState>,
	Path((entity_type, id)): Path<(String, String)>,
) -> Result<Json<EntityResponse>, ApiError> {
	let entity_type = entity_type.parse::<EntityType>().map_err(|err| {
		json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			err.to_string(),
			Some(vec!["entity_type".to_string()]),
		)
	})?;
	let id = Uuid::parse_str(&id).map_err(|_| {
		json_error(
			StatusCode::BAD_REQUEST,
			"invalid_request",
			"id must be a UUID.",
			Some(vec!["id".to_string()]),
		)
	})?;
	let response = state.service.entity(EntityRequest { entity_type, id }).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				json_error(StatusCode::BAD_REQUEST, "invalid_request", message, None),
			ServiceError::NotFound { message } =>
				json_error(StatusCode::NOT_FOUND, "not_found", message, None),
			ServiceError::Storage { message } => {
				tracing::error!(error = %message, "Catalogue lookup failed.");

				json_error(StatusCode::BAD_GATEWAY, "storage_error", "Catalogue is unavailable.", None)
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}
