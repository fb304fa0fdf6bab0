//! Permission rules

use crate::error::DomainError;

use super::Actor;

/// What the caller wants to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Read-only actions are "safe"
    #[inline]
    pub fn is_safe(self) -> bool {
        matches!(self, Self::Read)
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// What the action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Categories, genres and titles
    Catalog,
    /// Administrative user management
    UserDirectory,
    /// The caller's own account
    OwnProfile,
    /// A review; `author_id` is `None` when the review does not exist yet
    Review { author_id: Option<i64> },
    /// A comment; `author_id` is `None` when the comment does not exist yet
    Comment { author_id: Option<i64> },
}

impl Resource {
    const fn label(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::UserDirectory => "users",
            Self::OwnProfile => "profile",
            Self::Review { .. } => "review",
            Self::Comment { .. } => "comment",
        }
    }
}

/// Decide whether `actor` may perform `action` on `resource`
pub fn authorize(actor: &Actor, action: Action, resource: Resource) -> bool {
    match resource {
        Resource::Catalog => action.is_safe() || actor.is_admin(),
        Resource::UserDirectory => actor.is_admin(),
        Resource::OwnProfile => actor.is_authenticated(),
        Resource::Review { author_id } | Resource::Comment { author_id } => {
            if action.is_safe() {
                return true;
            }
            let Some(principal) = actor.principal() else {
                return false;
            };
            match action {
                Action::Create => true,
                _ => author_id == Some(principal.id) || principal.can_moderate(),
            }
        }
    }
}

/// Like [`authorize`], but produces the error a denied caller should see.
///
/// Anonymous callers get [`DomainError::NotAuthenticated`]; authenticated
/// callers get [`DomainError::Forbidden`].
pub fn require(actor: &Actor, action: Action, resource: Resource) -> Result<(), DomainError> {
    if authorize(actor, action, resource) {
        return Ok(());
    }
    if actor.is_authenticated() {
        Err(DomainError::Forbidden(format!(
            "not allowed to {} {}",
            action.verb(),
            resource.label()
        )))
    } else {
        Err(DomainError::NotAuthenticated)
    }
}
