//! Staff Registry Server
//!
//! HTTP API for the school staff registry: employee records live in an
//! in-memory store and are served over a small REST surface.
//!
//! # Module Structure
//!
//! ```text
//! registry-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── store/         # Employee store
//! └── utils/         # Environment setup, logging
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use store::EmployeeStore;
pub use utils::setup_environment;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
