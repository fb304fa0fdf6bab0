//! Authentication service
//!
//! Implements the signup handshake: a username/email pair is registered (or
//! re-used), a fresh confirmation code is mailed out, and the code is later
//! exchanged for a bearer token.

use chrono::Utc;
use tracing::{info, instrument, warn};
use yamdb_common::auth::{
    generate_confirmation_code, hash_confirmation_code, verify_confirmation_code,
};
use yamdb_core::traits::OutgoingMail;
use yamdb_core::value_objects::validate_username;
use yamdb_core::{normalize_email, ConfirmationCode, DomainError, NewUser, User};

use crate::dto::{SignupRequest, SignupResponse, TokenRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subject line of the confirmation mail
pub const CONFIRMATION_SUBJECT: &str = "YaMDb confirmation code";

/// Prefix of the body line carrying the code
pub const CODE_LINE_PREFIX: &str = "Confirmation code: ";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a username/email pair and mail a new confirmation code.
    ///
    /// Repeating the call with the exact same pair re-uses the account and
    /// rotates its code. The account and code stay stored even when the
    /// mail cannot be delivered.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        validate_username(&request.username)?;
        let email = normalize_email(&request.email);

        let user = self.find_or_create(&request.username, &email).await?;

        let code = generate_confirmation_code();
        let code_hash = hash_in_background(code.clone()).await?;
        let now = Utc::now();
        self.ctx
            .code_repo()
            .store(&ConfirmationCode {
                user_id: user.id,
                code_hash,
                expires_at: now + self.ctx.code_ttl(),
                created_at: now,
            })
            .await?;

        let mail = OutgoingMail {
            recipient: user.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body: format!(
                "Hello, {}!\n\n{CODE_LINE_PREFIX}{code}\n",
                user.username
            ),
        };
        if let Err(e) = self.ctx.mailer().send(&mail).await {
            warn!(user_id = user.id, error = %e, "Confirmation mail not delivered");
            return Err(e.into());
        }

        info!(user_id = user.id, "Confirmation code issued");

        Ok(SignupResponse {
            username: request.username,
            email: request.email,
        })
    }

    /// Exchange a confirmation code for a bearer token.
    ///
    /// The code is not consumed; it stays valid until it expires or a new
    /// signup rotates it.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn token(&self, request: TokenRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(request.username.clone()))?;

        let Some(stored) = self.ctx.code_repo().find(user.id).await? else {
            warn!(user_id = user.id, "Token exchange failed: no code issued");
            return Err(DomainError::InvalidConfirmationCode.into());
        };

        if stored.is_expired(Utc::now()) {
            warn!(user_id = user.id, "Token exchange failed: code expired");
            return Err(DomainError::InvalidConfirmationCode.into());
        }

        if !verify_in_background(request.confirmation_code, stored.code_hash).await? {
            warn!(user_id = user.id, "Token exchange failed: code mismatch");
            return Err(DomainError::InvalidConfirmationCode.into());
        }

        let token = self.ctx.token_issuer().issue(&user)?;
        info!(user_id = user.id, "Bearer token issued");

        Ok(TokenResponse { token })
    }

    async fn find_or_create(&self, username: &str, email: &str) -> ServiceResult<User> {
        let users = self.ctx.user_repo();

        if let Some(existing) = users.find_by_username(username).await? {
            if existing.matches(username, email) {
                return Ok(existing);
            }
            return Err(DomainError::UsernameTaken.into());
        }

        if users.find_by_email(email).await?.is_some() {
            return Err(DomainError::EmailTaken.into());
        }

        let new_user = NewUser::signup(username, email);
        new_user.validate()?;
        match users.create(&new_user).await {
            Ok(user) => {
                info!(user_id = user.id, "User registered");
                Ok(user)
            }
            // Lost a race with a signup for the same pair; the stored row wins
            Err(e @ (DomainError::UsernameTaken | DomainError::EmailTaken)) => {
                match users.find_by_username(username).await? {
                    Some(existing) if existing.matches(username, email) => Ok(existing),
                    _ => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Argon2 is CPU-bound; keep it off the async worker threads
async fn hash_in_background(code: String) -> ServiceResult<String> {
    tokio::task::spawn_blocking(move || hash_confirmation_code(&code))
        .await
        .map_err(|e| ServiceError::internal(format!("hashing task failed: {e}")))?
        .map_err(ServiceError::from)
}

async fn verify_in_background(code: String, hash: String) -> ServiceResult<bool> {
    tokio::task::spawn_blocking(move || verify_confirmation_code(&code, &hash))
        .await
        .map_err(|e| ServiceError::internal(format!("verification task failed: {e}")))?
        .map_err(ServiceError::from)
}
