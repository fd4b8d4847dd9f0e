//! Server utilities

pub mod logger;

pub use logger::{init_logger, init_logger_with_file};

/// Set up the process environment: load `.env`, then initialize logging
/// from `LOG_LEVEL` / `LOG_DIR`.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
