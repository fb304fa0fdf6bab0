//! Startup bootstrap
//!
//! Ensures the configured administrator account exists.

use tracing::{info, instrument};
use yamdb_common::BootstrapAdminConfig;
use yamdb_core::{normalize_email, NewUser, Role, User};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Bootstrap service
pub struct BootstrapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BootstrapService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create the administrator if absent, or promote the existing account
    #[instrument(skip(self, config), fields(username = %config.username))]
    pub async fn ensure_admin(&self, config: &BootstrapAdminConfig) -> ServiceResult<User> {
        let users = self.ctx.user_repo();

        if let Some(mut user) = users.find_by_username(&config.username).await? {
            if user.role == Role::Admin && user.is_staff {
                info!(user_id = user.id, "Bootstrap administrator already present");
                return Ok(user);
            }
            user.role = Role::Admin;
            user.is_staff = true;
            let promoted = users.update(&user).await?;
            info!(user_id = promoted.id, "Existing account promoted to administrator");
            return Ok(promoted);
        }

        let new_user = NewUser {
            username: config.username.clone(),
            email: normalize_email(&config.email),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: Role::Admin,
            is_staff: true,
        };
        new_user.validate()?;

        let created = users.create(&new_user).await?;
        info!(user_id = created.id, "Bootstrap administrator created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use yamdb_common::auth::JwtService;

    use super::*;
    use crate::testing::Harness;

    fn harness() -> Harness {
        Harness::new(Arc::new(JwtService::new("test-secret", 3600))).unwrap()
    }

    fn config(username: &str) -> BootstrapAdminConfig {
        BootstrapAdminConfig {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    #[tokio::test]
    async fn test_creates_admin() {
        let h = harness();
        let admin = BootstrapService::new(&h.ctx)
            .ensure_admin(&config("root"))
            .await
            .unwrap();
        assert!(admin.is_admin());
        assert!(admin.is_staff);
    }

    #[tokio::test]
    async fn test_promotes_existing_account() {
        let h = harness();
        let (existing, _) = h.seed_user("veteran", Role::User).await.unwrap();

        let admin = BootstrapService::new(&h.ctx)
            .ensure_admin(&config("veteran"))
            .await
            .unwrap();
        assert_eq!(admin.id, existing.id);
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(h.store.user_count(), 1);
    }

    #[tokio::test]
    async fn test_is_idempotent() {
        let h = harness();
        let service = BootstrapService::new(&h.ctx);
        let first = service.ensure_admin(&config("root")).await.unwrap();
        let second = service.ensure_admin(&config("root")).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(h.store.user_count(), 1);
    }
}
