//! Gateway router construction and dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use rowhook_core::EventKind;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};

use crate::payload::ChangePayload;
use crate::validate::validate_request;

/// Largest accepted request body, in bytes.
const BODY_LIMIT: usize = 1024 * 1024;

/// Boxed async function body invoked once a request validates.
///
/// Returning a JSON value answers 200 with that body; returning `None`
/// answers 200 with a generic done message.
pub type HookHandler = Arc<dyn Fn(ChangePayload) -> BoxFuture + Send + Sync>;

type BoxFuture = std::pin::Pin<
    Box<dyn std::future::Future<Output = anyhow::Result<Option<Value>>> + Send>,
>;

/// One registered function endpoint.
#[derive(Clone)]
pub struct HookRoute {
    pub table: String,
    pub event: EventKind,
    pub handler: HookHandler,
}

/// Gateway construction errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("cannot serve hooks without an API key")]
    MissingApiKey,
}

#[derive(Clone)]
struct GatewayState {
    api_key: Arc<str>,
    routes: Arc<HashMap<String, HookRoute>>,
}

/// Builder collecting function endpoints into one router.
#[derive(Default)]
pub struct Gateway {
    routes: HashMap<String, HookRoute>,
}

impl Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function endpoint under its name.
    pub fn register(
        mut self,
        name: impl Into<String>,
        table: impl Into<String>,
        event: EventKind,
        handler: HookHandler,
    ) -> Self {
        self.routes.insert(
            name.into(),
            HookRoute {
                table: table.into(),
                event,
                handler,
            },
        );
        self
    }

    /// Build the axum router serving every registered hook.
    ///
    /// Fails when the API key is empty; serving without one would let
    /// every callback through unauthenticated.
    pub fn into_router(self, api_key: impl Into<String>) -> Result<Router, GatewayError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let state = GatewayState {
            api_key: Arc::from(api_key),
            routes: Arc::new(self.routes),
        };

        Ok(Router::new()
            .route("/{name}", any(handle_hook))
            .with_state(state))
    }
}

/// Validate and dispatch one inbound trigger callback.
///
/// The route matches every method so that non-POST requests get the
/// contract's 400 response instead of a bare 405.
async fn handle_hook(
    State(state): State<GatewayState>,
    Path(name): Path<String>,
    req: Request,
) -> Response {
    let Some(route) = state.routes.get(&name) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let method = req.method().as_str().to_string();
    let provided_key = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let payload = read_payload(req.into_body()).await;

    let payload = match validate_request(
        &method,
        &route.table,
        route.event,
        &state.api_key,
        provided_key.as_deref(),
        payload.as_ref(),
    ) {
        Ok(payload) => payload.clone(),
        Err(err) => {
            warn!(function = %name, error = %err, "rejecting trigger callback");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": err.to_string() })),
            )
                .into_response();
        }
    };

    match (route.handler)(payload).await {
        Ok(Some(value)) => (StatusCode::OK, Json(value)).into_response(),
        Ok(None) => (StatusCode::OK, Json(json!({ "message": "Done" }))).into_response(),
        Err(err) => {
            error!(function = %name, error = %err, "hook handler failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}

/// Read and parse the request body; any shortfall maps to "missing".
async fn read_payload(body: Body) -> Option<ChangePayload> {
    let bytes = axum::body::to_bytes(body, BODY_LIMIT).await.ok()?;
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(&bytes).ok()
}
