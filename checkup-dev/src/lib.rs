mod conf;

pub use conf::StubConfig;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tracing::info;

/// Per-path response overrides, applied before any handler runs. Lets a
/// local run or a test force a specific route to misbehave.
#[derive(Debug, Default, Clone)]
pub struct StubBehavior {
    overrides: HashMap<String, u16>,
}

impl StubBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the given path to answer 500.
    pub fn fail(self, path: &str) -> Self {
        self.respond_with(path, 500)
    }

    /// Force the given path to answer an arbitrary status.
    pub fn respond_with(mut self, path: &str, status: u16) -> Self {
        self.overrides.insert(path.to_string(), status);
        self
    }

    /// Parse the `STUB_FAIL` format: comma-separated paths, each forced
    /// to 500. Empty entries are ignored.
    pub fn from_env_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .fold(Self::new(), |behavior, path| behavior.fail(path))
    }

    fn override_for(&self, path: &str) -> Option<u16> {
        self.overrides.get(path).copied()
    }
}

/// Stub rendition of the platform's v2 surface: every route the migration
/// checkup declares, with representative JSON bodies.
pub fn v2_router(behavior: StubBehavior) -> Router {
    let behavior = Arc::new(behavior);
    Router::new()
        .route("/api/v2/auth/me", get(auth_me))
        .route("/api/v2/auth/login", post(auth_login))
        .route("/api/v2/auth/logout", post(auth_logout))
        .route("/api/v2/properties", get(list_properties))
        .route("/api/v2/properties/{id}", get(get_property))
        .route("/api/v2/properties/{id}/amenities", get(property_amenities))
        .route("/api/v2/applications/{id}", get(get_application))
        .route("/api/v2/applications/user/{id}", get(applications_by_user))
        .route(
            "/api/v2/applications/property/{id}",
            get(applications_by_property),
        )
        .route("/api/v2/payments/{id}/receipt", get(payment_receipt))
        .route("/api/v2/payments/audit-logs", get(payment_audit_logs))
        .route(
            "/api/v2/leases/{id}/payment-history",
            get(lease_payment_history),
        )
        .route("/api/v2/leases/{id}/rent-payments", get(lease_rent_payments))
        .route("/api/v2/admin/settings", get(admin_settings))
        .route("/api/v2/admin/personas", get(admin_personas))
        .layer(middleware::from_fn_with_state(behavior, apply_overrides))
}

pub async fn start_server(config: StubConfig) -> Result<(), Box<dyn std::error::Error>> {
    let behavior = StubBehavior::from_env_list(&config.fail_paths);
    let app = v2_router(behavior);
    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port)).await?;
    info!("start stub v2 API on port {}", config.http_port);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn apply_overrides(
    State(behavior): State<Arc<StubBehavior>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(status) = behavior.override_for(request.uri().path()) {
        let code =
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (code, Json(json!({ "error": "injected response" }))).into_response();
    }
    next.run(request).await
}

async fn auth_me() -> Response {
    // no session handling in the stub; the real service answers 401 here too
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "not authenticated" })),
    )
        .into_response()
}

async fn auth_login(Json(credentials): Json<Value>) -> Response {
    let email = credentials
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default();
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "invalid credentials", "email": email })),
    )
        .into_response()
}

async fn auth_logout() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn list_properties() -> Json<Value> {
    Json(json!({
        "properties": [
            { "id": 1, "title": "Maple Court 2BR", "rent": 1450 },
            { "id": 2, "title": "Harborview Studio", "rent": 990 },
        ]
    }))
}

async fn get_property(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "id": id, "title": "Maple Court 2BR", "rent": 1450, "status": "listed" }))
}

async fn property_amenities(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({
        "property_id": id,
        "amenities": ["in-unit laundry", "parking", "pet friendly"]
    }))
}

async fn get_application(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "id": id, "status": "pending" }))
}

async fn applications_by_user(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "user_id": id, "applications": [{ "id": 1, "status": "pending" }] }))
}

async fn applications_by_property(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "property_id": id, "applications": [] }))
}

async fn payment_receipt(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({
        "payment_id": id,
        "amount": 1450,
        "receipt_url": format!("/receipts/{id}.pdf")
    }))
}

async fn payment_audit_logs() -> Json<Value> {
    Json(json!({ "entries": [{ "payment_id": 1, "action": "created" }] }))
}

async fn lease_payment_history(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "lease_id": id, "payments": [{ "month": "2025-07", "amount": 1450 }] }))
}

async fn lease_rent_payments(Path(id): Path<u64>) -> Json<Value> {
    Json(json!({ "lease_id": id, "rent_payments": [{ "due": "2025-08-01", "paid": true }] }))
}

async fn admin_settings() -> Json<Value> {
    Json(json!({ "maintenance_mode": false, "listing_fee_percent": 3 }))
}

async fn admin_personas() -> Json<Value> {
    Json(json!({ "personas": ["tenant", "landlord", "agent"] }))
}
