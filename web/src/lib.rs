//! Axum HTTP layer for the TangoMango event catalog.
//!
//! This crate is the imperative shell around `tangomango-core`: it parses
//! requests, calls the services, and serializes results into the uniform
//! response envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, JSON, CORS
//! │  - Request parsing                      │  ← Correlation IDs, tracing
//! │  - Envelope serialization               │  ← Metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Services over the in-memory store    │  ← Testable at memory speed
//! │  - Calendar derivation                  │  ← No I/O
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from path, query, and JSON body
//! 3. **Call** the matching service operation
//! 4. **Map result** into the `{success, data, error, count}` envelope
//! 5. **Return response** to the client

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unused_async)] // Axum handlers are async even when the body never awaits

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::AppJson;
pub use middleware::{correlation_id_layer, CORRELATION_ID_HEADER};
pub use response::ApiResponse;
pub use routes::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
