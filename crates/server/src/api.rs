//! REST API over the playbook repository.

use std::sync::Arc;

use advisor_client::PlaybookRepository;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::render::{self, PlaybookDetail, ScenarioReport};

const SERVICE_NAME: &str = "Playbook Advisor API";

/// Shared state for the API handlers.
#[derive(Clone)]
pub struct ApiState {
    repository: Arc<PlaybookRepository>,
    port: u16,
}

impl ApiState {
    pub fn new(repository: Arc<PlaybookRepository>, port: u16) -> Self {
        Self { repository, port }
    }
}

/// Creates the API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/playbooks", get(list_playbooks))
        .route("/api/prevention/:service", get(get_prevention))
        .route("/api/playbook/:scenario", get(get_playbook))
        .route("/api/docs", get(api_docs))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct PreventionQuery {
    question: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PlaybookQuery {
    playbook_name: Option<String>,
}

/// `?key=` counts as not given.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": SERVICE_NAME, "version": env!("CARGO_PKG_VERSION") })),
    )
}

async fn list_playbooks(State(state): State<ApiState>) -> impl IntoResponse {
    let playbooks = state.repository.list_documents().await;
    let count = playbooks.len();
    (StatusCode::OK, Json(json!({ "success": true, "data": playbooks, "count": count })))
}

async fn get_prevention(
    State(state): State<ApiState>, Path(service): Path<String>, Query(query): Query<PreventionQuery>,
) -> Result<Json<Value>, ApiError> {
    if service.trim().is_empty() {
        return Err(ApiError::InvalidInput("service cannot be empty".into()));
    }
    let question = present(query.question);

    let results = state.repository.search_by_service_keyword(&service).await;
    if results.is_empty() {
        return Err(ApiError::NoPlaybooksForService(service));
    }

    let guidance = render::prevention_report(&service, question.as_deref(), &results);
    Ok(Json(json!({
        "success": true,
        "data": {
            "service": service.to_uppercase(),
            "question": question,
            "guidance": guidance,
            "sources": render::sources(&results),
        },
    })))
}

async fn get_playbook(
    State(state): State<ApiState>, Path(scenario): Path<String>, Query(query): Query<PlaybookQuery>,
) -> Result<Json<Value>, ApiError> {
    if let Some(name) = present(query.playbook_name) {
        let content = state.repository.fetch_document(&name).await;
        if content.is_empty() {
            return Err(ApiError::PlaybookNotFound(name));
        }
        return Ok(Json(json!({ "success": true, "data": PlaybookDetail::new(name, content) })));
    }

    if scenario.trim().is_empty() {
        return Err(ApiError::InvalidInput("scenario cannot be empty".into()));
    }

    let results = state.repository.search_by_free_text(&scenario).await;
    let report = ScenarioReport::from_results(results).ok_or(ApiError::NoPlaybooksForScenario(scenario))?;
    Ok(Json(json!({ "success": true, "data": report })))
}

async fn api_docs(State(state): State<ApiState>) -> impl IntoResponse {
    (StatusCode::OK, Json(openapi_document(state.port)))
}

/// OpenAPI 3.0 description of the routes above.
fn openapi_document(port: u16) -> Value {
    let envelope = |data: Value| {
        json!({
            "type": "object",
            "properties": { "success": { "type": "boolean" }, "data": data },
        })
    };
    let error = json!({
        "description": "Nothing matched",
        "content": { "application/json": { "schema": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean" },
                "error": { "type": "string" },
                "supportedServices": { "type": "array", "items": { "type": "string" } },
            },
        }}},
    });
    let playbook = json!({
        "type": "object",
        "properties": {
            "filename": { "type": "string" },
            "summary": { "type": "string" },
            "content": { "type": "string" },
        },
    });

    json!({
        "openapi": "3.0.0",
        "info": {
            "title": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Security incident response playbook lookup",
        },
        "servers": [{ "url": format!("http://localhost:{port}"), "description": "Local server" }],
        "paths": {
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": { "200": { "description": "Service is up" } },
                },
            },
            "/api/playbooks": {
                "get": {
                    "summary": "Get all available playbooks",
                    "responses": {
                        "200": {
                            "description": "List of playbooks",
                            "content": { "application/json": { "schema": {
                                "type": "object",
                                "properties": {
                                    "success": { "type": "boolean" },
                                    "data": { "type": "array", "items": { "type": "string" } },
                                    "count": { "type": "number" },
                                },
                            }}},
                        },
                    },
                },
            },
            "/api/prevention/{service}": {
                "get": {
                    "summary": "Get prevention guidance for an AWS service",
                    "parameters": [
                        {
                            "name": "service",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" },
                            "description": "AWS service name (s3, iam, ec2, etc.)",
                        },
                        {
                            "name": "question",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string" },
                            "description": "Specific question about the service",
                        },
                    ],
                    "responses": {
                        "200": {
                            "description": "Prevention guidance",
                            "content": { "application/json": { "schema": envelope(json!({
                                "type": "object",
                                "properties": {
                                    "service": { "type": "string" },
                                    "question": { "type": "string", "nullable": true },
                                    "guidance": { "type": "string" },
                                    "sources": { "type": "array", "items": { "type": "string" } },
                                },
                            }))}},
                        },
                        "404": error.clone(),
                    },
                },
            },
            "/api/playbook/{scenario}": {
                "get": {
                    "summary": "Get the playbook for an incident scenario",
                    "parameters": [
                        {
                            "name": "scenario",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" },
                            "description": "Free text matched against playbook names",
                        },
                        {
                            "name": "playbook_name",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string" },
                            "description": "Exact playbook name; skips the scenario search",
                        },
                    ],
                    "responses": {
                        "200": {
                            "description": "Matching playbook and related playbooks",
                            "content": { "application/json": { "schema": envelope(json!({
                                "type": "object",
                                "properties": {
                                    "primary": playbook,
                                    "related": {
                                        "type": "array",
                                        "items": {
                                            "type": "object",
                                            "properties": {
                                                "filename": { "type": "string" },
                                                "summary": { "type": "string" },
                                            },
                                        },
                                    },
                                },
                            }))}},
                        },
                        "404": error,
                    },
                },
            },
        },
    })
}
