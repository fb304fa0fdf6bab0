//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! reading delivered confirmation codes and logging in.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;
use yamdb_api::{create_app, create_app_state};
use yamdb_common::{AppConfig, BootstrapAdminConfig, MailBackend};
use yamdb_service::testing::extract_code;

use crate::fixtures::{SignupRequest, TokenRequest, TokenResponse};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Directory the file mailer writes into
    pub mail_dir: PathBuf,
    /// Credentials of the administrator ensured at startup
    pub admin: BootstrapAdminConfig,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let mut config = test_config()?;

        let run_id = Uuid::new_v4().simple().to_string();
        let mail_dir = std::env::temp_dir().join(format!("yamdb-it-{run_id}"));
        config.mail.backend = MailBackend::File;
        config.mail.file_dir = mail_dir.clone();
        config.rate_limit.requests_per_second = 1000;
        config.rate_limit.burst = 10_000;

        let admin = BootstrapAdminConfig {
            username: format!("admin_{}", &run_id[..12]),
            email: format!("admin_{}@example.com", &run_id[..12]),
        };
        config.bootstrap_admin = Some(admin.clone());

        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            mail_dir,
            admin,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url(), path)
    }

    fn authorize(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a path outside the API prefix
    pub async fn get_unprefixed(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(url).send().await?)
    }

    /// GET an API path
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let request = Self::authorize(self.client.get(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// POST a JSON body to an API path
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authorize(self.client.post(self.url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// PATCH a JSON body to an API path
    pub async fn patch<T: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authorize(self.client.patch(self.url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// DELETE an API path
    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<Response> {
        let request = Self::authorize(self.client.delete(self.url(path)), token);
        Ok(request.send().await?)
    }

    /// The code in the most recent mail delivered to `email`
    pub async fn latest_code(&self, email: &str) -> Result<String> {
        latest_code_in(&self.mail_dir, email)
            .await?
            .with_context(|| format!("no confirmation mail for {email}"))
    }

    /// Run the full signup and token handshake, returning a bearer token
    pub async fn login(&self, username: &str, email: &str) -> Result<String> {
        let signup = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
        };
        let response = self.post("/auth/signup", None, &signup).await?;
        assert_status(response, StatusCode::OK).await?;

        let request = TokenRequest {
            username: username.to_string(),
            confirmation_code: self.latest_code(email).await?,
        };
        let response = self.post("/auth/token", None, &request).await?;
        let token: TokenResponse = assert_json(response, StatusCode::OK).await?;
        Ok(token.token)
    }

    /// Log in as the bootstrap administrator
    pub async fn login_admin(&self) -> Result<String> {
        let admin = self.admin.clone();
        self.login(&admin.username, &admin.email).await
    }
}

async fn latest_code_in(dir: &Path, email: &str) -> Result<Option<String>> {
    let header = format!("To: {email}\n");
    let mut latest: Option<(String, String)> = None;

    // File names start with a microsecond timestamp, so the greatest is newest
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let content = tokio::fs::read_to_string(entry.path()).await?;
        if !content.contains(&header) {
            continue;
        }
        if latest.as_ref().is_none_or(|(newest, _)| name > *newest) {
            latest = Some((name, content));
        }
    }

    Ok(latest.and_then(|(_, content)| extract_code(&content)))
}

/// Create a test configuration from the environment
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
