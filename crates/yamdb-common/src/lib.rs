//! # yamdb-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! mail delivery, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod mail;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_confirmation_code, hash_confirmation_code, verify_confirmation_code, Claims,
    JwtService, CONFIRMATION_CODE_LENGTH,
};
pub use config::{
    AppConfig, AppSettings, BootstrapAdminConfig, ConfigError, ConfirmationConfig, CorsConfig,
    DatabaseConfig, Environment, JwtConfig, MailBackend, MailConfig, RateLimitConfig,
    ServerConfig,
};
pub use error::{AppError, AppResult};
pub use mail::{build_mailer, ConsoleMailer, FileMailer};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
