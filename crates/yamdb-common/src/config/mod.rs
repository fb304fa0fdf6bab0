//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BootstrapAdminConfig, ConfigError, ConfirmationConfig, CorsConfig,
    DatabaseConfig, Environment, JwtConfig, MailBackend, MailConfig, RateLimitConfig,
    ServerConfig,
};
