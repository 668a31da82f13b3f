//! Questsmith Shared - wire contract with the quest generation API
//!
//! This crate contains the types and paths shared by the client and the
//! generation API it talks to:
//! - Endpoint paths
//! - Request bodies (the brief itself, and the regenerate wrapper)
//! - Failure and health response bodies
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod requests;
pub mod responses;
pub mod routes;

pub use requests::RegenerateQuestRequest;
pub use responses::{failure_message, status_failure_message, ErrorResponse, HealthResponse};
pub use routes::{GENERATE_QUEST_PATH, HEALTH_PATH, REGENERATE_QUEST_PATH};

// Re-export the domain vocabulary that travels on the wire
pub use questsmith_domain::{Brief, Section};
