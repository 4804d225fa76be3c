//! Clinic Website API
//!
//! Backend for the clinic's bilingual marketing site. Visitors send contact
//! messages and request appointments; staff list them and move appointments
//! through their status lifecycle.
//!
//! ## Modules
//! - **`schema`**: Record types and request payload validation.
//! - **`storage`**: The `Storage` seam and the in-memory `MemStorage` backend.
//! - **`api`**: Axum handlers and router for the `/api` surface.
//! - **`config`**: Environment and command-line configuration.
//! - **`server`**: CORS, tracing, static assets and graceful shutdown around the API.

pub mod api;
pub mod config;
pub mod schema;
pub mod server;
pub mod storage;
