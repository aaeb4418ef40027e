//! HTTP transport implementation.
//!
//! Serves the site routes (`/`, `/admin`, `/{slug}`), widget calls
//! (`POST /{slug}`), the preference and admin APIs, and JSON-RPC over POST
//! so plain HTTP clients can talk MCP.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ToollyServer;
use crate::domains::admin::{AdminError, ToolEdit};
use crate::domains::preferences::Theme;
use crate::domains::shell::{PageQuery, ShellError};
use crate::domains::tools::ToolError;

const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<serde_json::Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<serde_json::Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<serde_json::Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: ToollyServer,
    /// MCP session negotiated over JSON-RPC.
    session: Arc<RwLock<Option<SessionState>>>,
}

#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: ToollyServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Pages:    GET /, /admin, /{{slug}}");
        info!("  → Widgets:  POST /{{slug}}");
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the full HTTP router.
pub fn build_router(server: ToollyServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        session: Arc::new(RwLock::new(None)),
    };

    let mut app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/api/favorites", get(list_favorites))
        .route("/api/favorites/{id}", post(toggle_favorite))
        .route("/api/theme", get(get_theme).put(set_theme))
        .route("/api/theme/toggle", post(toggle_theme))
        .route("/admin/login", post(admin_login))
        .route("/admin/logout", post(admin_logout))
        .route("/admin/tools/{id}/status", post(admin_toggle_status))
        .route("/admin/tools/{id}", axum::routing::patch(admin_edit_tool))
        .route("/", get(page))
        .route("/admin", get(page))
        .route("/{slug}", get(page).post(run_widget))
        .with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

// ============================================================================
// Helpers
// ============================================================================

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn parse_body(body: &Bytes) -> Result<serde_json::Value, Response> {
    if body.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {}", e)))
}

fn shell_error_response(error: ShellError) -> Response {
    match error {
        ShellError::Catalog(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        ShellError::Admin(e) => admin_error_response(e),
        other => {
            warn!("Page rendering failed: {}", other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

fn admin_error_response(error: AdminError) -> Response {
    let status = match &error {
        AdminError::InvalidCredentials { remaining } => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "error": error.to_string(),
                    "remaining_attempts": remaining,
                })),
            )
                .into_response();
        }
        AdminError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        AdminError::Locked { .. } => StatusCode::TOO_MANY_REQUESTS,
        AdminError::UnknownTool(_) => StatusCode::NOT_FOUND,
        AdminError::SlugTaken(_) => StatusCode::CONFLICT,
        AdminError::InvalidEdit(_) | AdminError::UnknownTab(_) => StatusCode::BAD_REQUEST,
        AdminError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

fn tool_error_response(error: ToolError) -> Response {
    let status = match &error {
        ToolError::NotFound(_) => StatusCode::NOT_FOUND,
        ToolError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
        ToolError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
        ToolError::ExecutionFailed(_) | ToolError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error.to_string())
}

// ============================================================================
// Site
// ============================================================================

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Grid, admin and tool pages.
#[instrument(skip_all, fields(path = %uri.path()))]
async fn page(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = match state.server.shell().render(uri.path(), &query) {
        Ok(page) => page,
        Err(e) => return shell_error_response(e),
    };

    let status = if page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    if wants_html(&headers) {
        match page.to_html() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => shell_error_response(e),
        }
    } else {
        (status, Json(page)).into_response()
    }
}

/// Run the widget of the tool at `slug` with a JSON body.
#[instrument(skip(state, body))]
async fn run_widget(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    body: Bytes,
) -> Response {
    let arguments = match parse_body(&body) {
        Ok(arguments) => arguments,
        Err(response) => return response,
    };

    match state.server.call_widget(&slug, arguments).await {
        None => error_response(StatusCode::NOT_FOUND, format!("No tool at /{}", slug)),
        Some(Ok(result)) => Json(result).into_response(),
        Some(Err(e)) => tool_error_response(e),
    }
}

// ============================================================================
// Preferences
// ============================================================================

async fn list_favorites(State(state): State<AppState>) -> Response {
    Json(serde_json::json!({ "favorites": state.server.shell().favorites().list() }))
        .into_response()
}

/// Toggle a favorite; only catalog ids are accepted.
#[instrument(skip(state))]
async fn toggle_favorite(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let shell = state.server.shell();
    if !shell.catalog().contains(&id) {
        return error_response(StatusCode::NOT_FOUND, format!("Unknown tool id: {}", id));
    }

    match shell.favorites().toggle(&id) {
        Ok(favorite) => Json(serde_json::json!({
            "id": id,
            "favorite": favorite,
            "favorites": shell.favorites().list(),
        }))
        .into_response(),
        Err(e) => {
            warn!("Failed to save favorites: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct ThemeBody {
    theme: Theme,
}

async fn get_theme(State(state): State<AppState>) -> Response {
    match state.server.shell().theme().get() {
        Ok(theme) => Json(serde_json::json!({ "theme": theme })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

async fn set_theme(State(state): State<AppState>, Json(body): Json<ThemeBody>) -> Response {
    match state.server.shell().theme().set(body.theme) {
        Ok(()) => Json(serde_json::json!({ "theme": body.theme })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

async fn toggle_theme(State(state): State<AppState>) -> Response {
    match state.server.shell().theme().toggle() {
        Ok(theme) => Json(serde_json::json!({ "theme": theme })).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

#[instrument(skip_all)]
async fn admin_login(State(state): State<AppState>, Json(body): Json<LoginBody>) -> Response {
    match state
        .server
        .shell()
        .session()
        .login(&body.username, &body.password)
        .await
    {
        Ok(session) => Json(session).into_response(),
        Err(e) => admin_error_response(e),
    }
}

async fn admin_logout(State(state): State<AppState>) -> Response {
    match state.server.shell().session().logout() {
        Ok(session) => Json(session).into_response(),
        Err(e) => admin_error_response(e),
    }
}

#[instrument(skip(state))]
async fn admin_toggle_status(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let shell = state.server.shell();
    let result = shell
        .session()
        .require_login()
        .and_then(|_| shell.dashboard().toggle_status(&id));

    match result {
        Ok(status) => Json(serde_json::json!({ "id": id, "status": status })).into_response(),
        Err(e) => admin_error_response(e),
    }
}

#[instrument(skip(state, edit))]
async fn admin_edit_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(edit): Json<ToolEdit>,
) -> Response {
    let shell = state.server.shell();
    let result = shell
        .session()
        .require_login()
        .and_then(|_| shell.dashboard().edit(&id, edit));

    match result {
        Ok(record) => Json(record).into_response(),
        Err(e) => admin_error_response(e),
    }
}

// ============================================================================
// JSON-RPC
// ============================================================================

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::invalid_request(request.id);
    }

    match request.method.as_str() {
        "initialize" => handle_initialize(state, request).await,
        "tools/list" => handle_tools_list(state, request),
        "tools/call" => handle_tools_call(state, request).await,
        "resources/list" => handle_resources_list(state, request).await,
        "resources/templates/list" => handle_resources_templates_list(state, request).await,
        "resources/read" => handle_resources_read(state, request).await,

        // Notifications get an empty success over stateless HTTP
        method if method.starts_with("notifications/") => {
            handle_notification(state, &request).await;
            JsonRpcResponse::success(request.id, serde_json::json!(null))
        }

        _ => {
            warn!("Unknown method: {}", request.method);
            JsonRpcResponse::method_not_found(request.id)
        }
    }
}

async fn handle_initialize(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing initialize request");

    let mut session = state.session.write().await;
    *session = Some(SessionState { initialized: false });

    let result = serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": state.server.instructions()
    });

    JsonRpcResponse::success(request.id, result)
}

fn handle_tools_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/list request");

    let tools = state.server.list_tools();
    JsonRpcResponse::success(request.id, serde_json::json!({ "tools": tools }))
}

async fn handle_tools_call(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let name = match params.get("name").and_then(|v| v.as_str()) {
        Some(n) => n.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing tool name"),
    };

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match state.server.call_tool(&name, arguments).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::internal_error(request.id, e.to_string()),
        },
        Err(e) => JsonRpcResponse::invalid_params(request.id, e.to_string()),
    }
}

async fn handle_resources_list(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing resources/list request");

    let resources = state.server.list_resources().await;
    JsonRpcResponse::success(request.id, serde_json::json!({ "resources": resources }))
}

async fn handle_resources_templates_list(
    state: &AppState,
    request: JsonRpcRequest,
) -> JsonRpcResponse {
    info!("Processing resources/templates/list request");

    let templates = state.server.list_resource_templates().await;
    JsonRpcResponse::success(
        request.id,
        serde_json::json!({ "resourceTemplates": templates }),
    )
}

async fn handle_resources_read(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    info!("Processing resources/read request");

    let params = match request.params {
        Some(p) => p,
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing params"),
    };

    let uri = match params.get("uri").and_then(|v| v.as_str()) {
        Some(u) => u.to_string(),
        None => return JsonRpcResponse::invalid_params(request.id.clone(), "Missing resource URI"),
    };

    match state.server.read_resource(&uri).await {
        Ok(result) => JsonRpcResponse::success(request.id, result),
        Err(e) => JsonRpcResponse::invalid_params(request.id, e),
    }
}

async fn handle_notification(state: &AppState, request: &JsonRpcRequest) {
    match request.method.as_str() {
        "notifications/initialized" => {
            info!("Client sent initialized notification");
            let mut session = state.session.write().await;
            if let Some(ref mut s) = *session {
                s.initialized = true;
            }
        }
        _ => {
            info!("Received notification: {}", request.method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::server::tests::test_server;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(test_server(), &HttpConfig::default())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn rpc(app: &Router, method: &str, params: Value) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/mcp",
            Some(json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": params })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, body) = send(&app(), "GET", "/?category=Text", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["body"]["kind"], "grid");
        assert_eq!(body["body"]["heading"], "Text Tools");

        let (status, _) = send(&app(), "GET", "/?category=Games", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_tool_page_and_not_found() {
        let app = app();
        let (status, body) = send(&app, "GET", "/json-formatter", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["body"]["content"]["tool"], "json_formatter");

        let (status, body) = send(&app, "GET", "/no-such-tool", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["body"]["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_tool_page_as_html() {
        let request = Request::builder()
            .uri("/password-generator")
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("data-tool=\"password_generator\""));
    }

    #[tokio::test]
    async fn test_run_widget() {
        let app = app();
        let (status, body) = send(
            &app,
            "POST",
            "/json-formatter",
            Some(json!({ "input": "{\"a\":1,\"b\":[1,2]}", "mode": "minify" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["structuredContent"]["output"], "{\"a\":1,\"b\":[1,2]}");

        let (status, _) = send(&app, "POST", "/pdf-compressor", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);

        let (status, _) = send(&app, "POST", "/nope", Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_favorites_api() {
        let app = app();
        let (status, body) = send(&app, "POST", "/api/favorites/qr-gen", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["favorite"], true);

        let (_, body) = send(&app, "GET", "/api/favorites", None).await;
        assert_eq!(body["favorites"], json!(["qr-gen"]));

        let (status, _) = send(&app, "POST", "/api/favorites/not-a-tool", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_theme_api() {
        let app = app();
        let (_, body) = send(&app, "GET", "/api/theme", None).await;
        assert_eq!(body["theme"], "light");

        let (status, body) = send(&app, "PUT", "/api/theme", Some(json!({ "theme": "dark" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["theme"], "dark");

        let (_, body) = send(&app, "POST", "/api/theme/toggle", None).await;
        assert_eq!(body["theme"], "light");
    }

    #[tokio::test]
    async fn test_admin_flow() {
        let app = app();

        let (status, _) = send(&app, "POST", "/admin/tools/qr-gen/status", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            "POST",
            "/admin/login",
            Some(json!({ "username": "operator", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["remaining_attempts"], 4);

        let (status, body) = send(
            &app,
            "POST",
            "/admin/login",
            Some(json!({ "username": "OPERATOR", "password": "s3cret" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "logged_in");

        let (status, body) = send(&app, "POST", "/admin/tools/qr-gen/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "inactive");

        let (status, _) = send(
            &app,
            "PATCH",
            "/admin/tools/qr-gen",
            Some(json!({ "slug": "word-counter" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            "PATCH",
            "/admin/tools/qr-gen",
            Some(json!({ "seoTitle": "QR Codes, Fast" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["seoTitle"], "QR Codes, Fast");

        let (_, body) = send(&app, "GET", "/admin?tab=analytics", None).await;
        assert_eq!(body["body"]["dashboard"]["tab"], "analytics");

        let (_, body) = send(&app, "POST", "/admin/logout", None).await;
        assert_eq!(body["state"], "logged_out");
    }

    #[tokio::test]
    async fn test_rpc_initialize_and_lists() {
        let app = app();

        let body = rpc(&app, "initialize", json!({})).await;
        assert_eq!(body["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert!(body["result"]["capabilities"]["prompts"].is_null());

        let body = rpc(&app, "tools/list", json!({})).await;
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 19);

        let body = rpc(&app, "resources/templates/list", json!({})).await;
        assert_eq!(
            body["result"]["resourceTemplates"][0]["uriTemplate"],
            "toolly://tools/{slug}"
        );

        let body = rpc(&app, "resources/read", json!({ "uri": "toolly://favorites" })).await;
        assert!(body["result"]["contents"].is_array());

        let body = rpc(&app, "prompts/list", json!({})).await;
        assert_eq!(body["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_rpc_tools_call() {
        let app = app();
        let body = rpc(
            &app,
            "tools/call",
            json!({ "name": "password_generator", "arguments": {
                "length": 8, "uppercase": false, "lowercase": false, "numbers": true, "symbols": false
            }}),
        )
        .await;
        let password = body["result"]["structuredContent"]["password"].as_str().unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));

        let body = rpc(&app, "tools/call", json!({ "name": "missing" })).await;
        assert_eq!(body["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_rpc_rejects_wrong_version() {
        let (_, body) = send(
            &app(),
            "POST",
            "/mcp",
            Some(json!({ "jsonrpc": "1.0", "id": 1, "method": "tools/list" })),
        )
        .await;
        assert_eq!(body["error"]["code"], -32600);
    }
}
