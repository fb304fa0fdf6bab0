//! User service
//!
//! Self-profile access for any authenticated caller and username-addressed
//! account management for administrators.

use tracing::{info, instrument};
use validator::Validate;
use yamdb_core::traits::PageRequest;
use yamdb_core::{normalize_email, require, Action, Actor, DomainError, NewUser, Resource, User};

use crate::dto::{
    CreateUserRequest, PaginatedResponse, UpdateProfileRequest, UpdateUserRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Self profile ===

    /// The caller's own record
    #[instrument(skip(self))]
    pub async fn me(&self, actor: &Actor) -> ServiceResult<UserResponse> {
        require(actor, Action::Read, Resource::OwnProfile)?;
        let user = self.current_user(actor).await?;
        Ok(UserResponse::from(&user))
    }

    /// Update the caller's own record. The role never changes here.
    #[instrument(skip(self, request))]
    pub async fn update_me(
        &self,
        actor: &Actor,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        require(actor, Action::Update, Resource::OwnProfile)?;
        request.validate()?;
        let user = self.current_user(actor).await?;
        let role = user.role;

        let mut updated = apply_changes(user, UpdateUserRequest::from(request));
        updated.role = role;

        let saved = self.save(updated).await?;
        Ok(UserResponse::from(&saved))
    }

    // === Administration ===

    /// List users, optionally filtered by a username substring
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        actor: &Actor,
        search: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<UserResponse>> {
        require(actor, Action::Read, Resource::UserDirectory)?;
        let found = self.ctx.user_repo().list(search, page).await?;
        Ok(PaginatedResponse::from_page(found, page, UserResponse::from))
    }

    /// Create an account directly
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require(actor, Action::Create, Resource::UserDirectory)?;
        request.validate()?;

        let new_user = NewUser {
            username: request.username,
            email: normalize_email(&request.email),
            first_name: request.first_name,
            last_name: request.last_name,
            bio: request.bio,
            role: request.role,
            is_staff: false,
        };
        new_user.validate()?;

        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = user.id, role = %user.role, "User created by administrator");
        Ok(UserResponse::from(&user))
    }

    /// Fetch one account by username
    #[instrument(skip(self))]
    pub async fn get(&self, actor: &Actor, username: &str) -> ServiceResult<UserResponse> {
        require(actor, Action::Read, Resource::UserDirectory)?;
        let user = self.by_username(username).await?;
        Ok(UserResponse::from(&user))
    }

    /// Partially update an account; the role may change here
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        username: &str,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        require(actor, Action::Update, Resource::UserDirectory)?;
        request.validate()?;
        let user = self.by_username(username).await?;

        let saved = self.save(apply_changes(user, request)).await?;
        info!(user_id = saved.id, "User updated by administrator");
        Ok(UserResponse::from(&saved))
    }

    /// Delete an account and, by cascade, its reviews and comments
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, username: &str) -> ServiceResult<()> {
        require(actor, Action::Delete, Resource::UserDirectory)?;
        let user = self.by_username(username).await?;

        if !self.ctx.user_repo().delete(user.id).await? {
            return Err(DomainError::UserNotFound(username.to_string()).into());
        }
        info!(user_id = user.id, "User deleted");
        Ok(())
    }

    async fn current_user(&self, actor: &Actor) -> ServiceResult<User> {
        let principal = actor.principal().ok_or(DomainError::NotAuthenticated)?;
        self.ctx
            .user_repo()
            .find_by_id(principal.id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::NotAuthenticated))
    }

    async fn by_username(&self, username: &str) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()).into())
    }

    async fn save(&self, user: User) -> ServiceResult<User> {
        user.validate()?;
        Ok(self.ctx.user_repo().update(&user).await?)
    }
}

fn apply_changes(mut user: User, request: UpdateUserRequest) -> User {
    if let Some(username) = request.username {
        user.username = username;
    }
    if let Some(email) = request.email {
        user.email = normalize_email(&email);
    }
    if let Some(first_name) = request.first_name {
        user.first_name = first_name;
    }
    if let Some(last_name) = request.last_name {
        user.last_name = last_name;
    }
    if let Some(bio) = request.bio {
        user.bio = bio;
    }
    if let Some(role) = request.role {
        user.role = role;
    }
    user
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use yamdb_common::auth::JwtService;
    use yamdb_core::Role;

    use super::*;
    use crate::testing::Harness;

    fn harness() -> Harness {
        Harness::new(Arc::new(JwtService::new("test-secret", 3600))).unwrap()
    }

    #[tokio::test]
    async fn test_me_requires_authentication() {
        let h = harness();
        let err = UserService::new(&h.ctx)
            .me(&Actor::Anonymous)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_profile_patch_preserves_role() {
        let h = harness();
        let (_, actor) = h.seed_user("reader", Role::User).await.unwrap();

        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"bio": "Reads a lot", "role": "admin"}"#).unwrap();
        let updated = UserService::new(&h.ctx)
            .update_me(&actor, request)
            .await
            .unwrap();

        assert_eq!(updated.bio, "Reads a lot");
        assert_eq!(updated.role, Role::User);
    }

    #[tokio::test]
    async fn test_profile_patch_rejects_reserved_username() {
        let h = harness();
        let (_, actor) = h.seed_user("reader", Role::User).await.unwrap();

        let request = UpdateProfileRequest {
            username: Some("me".to_string()),
            ..Default::default()
        };
        let err = UserService::new(&h.ctx)
            .update_me(&actor, request)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::ReservedUsername)));
    }

    #[tokio::test]
    async fn test_directory_is_admin_only() {
        let h = harness();
        let (_, moderator) = h.seed_user("moder", Role::Moderator).await.unwrap();
        let users = UserService::new(&h.ctx);

        let err = users
            .list(&moderator, None, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        let err = users
            .list(&Actor::Anonymous, None, PageRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_admin_manages_users() {
        let h = harness();
        let (_, admin) = h.seed_user("boss", Role::Admin).await.unwrap();
        let users = UserService::new(&h.ctx);

        let created = users
            .create(
                &admin,
                CreateUserRequest {
                    username: "newbie".to_string(),
                    email: "Newbie@Example.com".to_string(),
                    first_name: "New".to_string(),
                    last_name: String::new(),
                    bio: String::new(),
                    role: Role::User,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.email, "newbie@example.com");

        let promoted = users
            .update(
                &admin,
                "newbie",
                UpdateUserRequest {
                    role: Some(Role::Moderator),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(promoted.role, Role::Moderator);

        let page = users
            .list(&admin, Some("NEW"), PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].username, "newbie");

        users.delete(&admin, "newbie").await.unwrap();
        let err = users.get(&admin, "newbie").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_admin_create_conflicts() {
        let h = harness();
        let (_, admin) = h.seed_user("boss", Role::Admin).await.unwrap();
        h.seed_user("taken", Role::User).await.unwrap();

        let err = UserService::new(&h.ctx)
            .create(
                &admin,
                CreateUserRequest {
                    username: "taken".to_string(),
                    email: "fresh@example.com".to_string(),
                    first_name: String::new(),
                    last_name: String::new(),
                    bio: String::new(),
                    role: Role::User,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::UsernameTaken)));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_staff_flag_counts_as_admin() {
        let h = harness();
        let (mut staff, _) = h.seed_user("staff", Role::User).await.unwrap();
        staff.is_staff = true;
        let actor = Actor::from(&staff);

        assert!(UserService::new(&h.ctx)
            .list(&actor, None, PageRequest::default())
            .await
            .is_ok());
    }
}
