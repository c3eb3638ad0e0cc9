//! rowhook-gateway — inbound request validation for function endpoints.
//!
//! The triggers rowhook installs call back into the deployed functions
//! over HTTP. This crate is the receiving side: an axum router serving
//! `POST /{name}` for every registered hook, checking each request
//! against the function's configured table, event kind, and the shared
//! API key before handing the payload to the function body.
//!
//! Validation failures answer 400 with a `{"message"}` body; handler
//! errors answer a generic 500. Both are request-scoped — the server
//! keeps serving.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use rowhook_core::EventKind;
//! use rowhook_gateway::Gateway;
//!
//! # async fn serve() -> anyhow::Result<()> {
//! let router = Gateway::new()
//!     .register(
//!         "sendWelcome",
//!         "users",
//!         EventKind::RowCreated,
//!         Arc::new(|payload| {
//!             Box::pin(async move {
//!                 tracing::info!(record = ?payload.record, "welcoming new user");
//!                 Ok(None)
//!             })
//!         }),
//!     )
//!     .into_router("s3cr3t")?;
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod payload;
pub mod router;
pub mod validate;

pub use payload::ChangePayload;
pub use router::{Gateway, GatewayError, HookHandler, HookRoute};
pub use validate::{ValidationError, validate_request};
