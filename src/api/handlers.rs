use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use tracing::info;

use crate::codegen::{self, GeneratedSource, TARGET_LANGUAGE};
use crate::types::{
    AgentConfiguration, ForgeError, TaskStore, ValidationIssue, BUILTIN_TASK_STORES,
};
use crate::validate::validate;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub target_language: String,
    pub task_stores: Vec<String>,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        target_language: TARGET_LANGUAGE.to_string(),
        task_stores: BUILTIN_TASK_STORES.iter().map(|s| s.to_string()).collect(),
    })
}

#[derive(Serialize)]
pub struct TaskStoreInfo {
    pub kind: String,
    pub class_name: String,
    pub module: Option<String>,
}

/// GET /task-stores
pub async fn list_task_stores() -> Json<Vec<TaskStoreInfo>> {
    let stores = [TaskStore::InMemory];
    Json(
        stores
            .iter()
            .map(|store| TaskStoreInfo {
                kind: store.as_str().to_string(),
                class_name: store.class_name().to_string(),
                module: store.module().map(|m| m.to_string()),
            })
            .collect(),
    )
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

/// POST /config/validate
///
/// Always 200: user input problems are data, not failures.
pub async fn validate_config(
    payload: Result<Json<AgentConfiguration>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ForgeError> {
    let Json(config) = payload?;

    let report = validate(&config);
    info!(
        "Validated configuration for agent '{}': {} issue(s)",
        config.agent_card.name,
        report.issues.len()
    );

    Ok(Json(ValidateResponse {
        valid: !report.has_errors(),
        issues: report.issues,
    }))
}

#[derive(Serialize)]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub generated: GeneratedSource,
    pub warnings: Vec<ValidationIssue>,
}

/// POST /config/generate
pub async fn generate_code(
    payload: Result<Json<AgentConfiguration>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ForgeError> {
    let Json(config) = payload?;

    let report = validate(&config);
    if report.has_errors() {
        info!(
            "Rejected generation for agent '{}': {} error(s)",
            config.agent_card.name,
            report.errors().count()
        );
        return Err(ForgeError::ValidationFailed(report.issues));
    }

    let generated = codegen::generate(&config)?;
    info!(
        "Generated {} bytes for agent '{}' (sha256 {})",
        generated.source.len(),
        config.agent_card.name,
        generated.digest
    );

    Ok(Json(GenerateResponse {
        generated,
        warnings: report.warnings().cloned().collect(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::AppState;

    fn app(api_key: Option<&str>) -> Router {
        let config = Config {
            api_key: api_key.map(|k| k.to_string()),
            ..Config::default()
        };
        crate::api::router(Arc::new(AppState { config }))
    }

    fn echo_body() -> Value {
        json!({
            "agent_card": {
                "name": "Echo",
                "url": "http://localhost:9000",
                "version": "1.0",
                "skills": [{"id": "echo", "name": "Echo Skill"}]
            },
            "server": {
                "executor_class_name": "EchoExecutor",
                "task_store": {"kind": "in_memory"}
            },
            "relationships": [{"name": "Peer", "url": "http://localhost:9001"}]
        })
    }

    async fn post(app: Router, uri: &str, body: &Value, key: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(key) = key {
            request = request.header("X-API-Key", key);
        }
        let request = request.body(Body::from(body.to_string())).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["task_stores"], json!(["in_memory"]));
    }

    #[tokio::test]
    async fn test_task_stores() {
        let response = app(None)
            .oneshot(Request::get("/task-stores").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body[0]["class_name"], "InMemoryTaskStore");
        assert_eq!(body[0]["module"], "a2a.server.tasks");
    }

    #[tokio::test]
    async fn test_validate_clean() {
        let (status, body) = post(app(None), "/config/validate", &echo_body(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
        assert_eq!(body["issues"], json!([]));
    }

    #[tokio::test]
    async fn test_validate_reports_issues() {
        let mut body = echo_body();
        body["agent_card"]["name"] = json!("");

        let (status, body) = post(app(None), "/config/validate", &body, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
        assert_eq!(body["issues"][0]["field"], "agent_card.name");
        assert_eq!(body["issues"][0]["severity"], "error");
    }

    #[tokio::test]
    async fn test_generate() {
        let (status, body) = post(app(None), "/config/generate", &echo_body(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "python");
        assert_eq!(body["warnings"], json!([]));

        let source = body["source"].as_str().unwrap();
        assert!(source.contains("agent_executor=EchoExecutor()"));
        assert!(source.contains("(\"Peer\", \"http://localhost:9001\")"));
        assert_eq!(body["digest"].as_str().unwrap().len(), 64);
    }

    #[tokio::test]
    async fn test_generate_rejects_invalid() {
        let mut body = echo_body();
        body["server"]["executor_class_name"] = json!("not-valid");

        let (status, body) = post(app(None), "/config/generate", &body, None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["details"][0]["field"], "server.executor_class_name");
    }

    #[tokio::test]
    async fn test_generate_returns_warnings() {
        let mut body = echo_body();
        body["relationships"] = json!([
            {"name": "Peer", "url": "http://localhost:9001"},
            {"name": "Peer", "url": "http://localhost:9002"}
        ]);

        let (status, body) = post(app(None), "/config/generate", &body, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["warnings"][0]["code"], "DUPLICATE_RELATIONSHIP");
    }

    #[tokio::test]
    async fn test_omitted_fields_reported_together() {
        let body = json!({
            "agent_card": {
                "url": "http://localhost:9000",
                "version": "1.0",
                "skills": [{"id": "echo"}]
            },
            "server": {}
        });
        let (status, body) = post(app(None), "/config/validate", &body, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);

        let fields: Vec<&str> = body["issues"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["field"].as_str().unwrap())
            .collect();
        assert_eq!(
            fields,
            vec![
                "agent_card.name",
                "agent_card.skills[0].name",
                "server.executor_class_name",
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let body = json!({"agent_card": {"name": 5}});
        let (status, body) = post(app(None), "/config/validate", &body, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_request");
    }

    #[tokio::test]
    async fn test_api_key_gate() {
        let (status, body) =
            post(app(Some("secret")), "/config/validate", &echo_body(), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");

        let (status, _) =
            post(app(Some("secret")), "/config/validate", &echo_body(), Some("wrong")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) =
            post(app(Some("secret")), "/config/validate", &echo_body(), Some("secret")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);
    }

    #[tokio::test]
    async fn test_cardforge_key_header() {
        let request = Request::builder()
            .method("POST")
            .uri("/config/validate")
            .header("content-type", "application/json")
            .header("X-Cardforge-Key", "secret")
            .body(Body::from(echo_body().to_string()))
            .unwrap();

        let response = app(Some("secret")).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
