//! The caller as seen by the policy

use crate::entities::User;
use crate::value_objects::Role;

/// Identity and privileges of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub role: Role,
    pub is_staff: bool,
}

impl Principal {
    /// Administrator rights: staff flag or admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.role == Role::Admin
    }

    /// May act on content written by others
    #[inline]
    pub fn can_moderate(&self) -> bool {
        self.is_admin() || self.role == Role::Moderator
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
            is_staff: user.is_staff,
        }
    }
}

/// Who is making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Actor {
    #[default]
    Anonymous,
    Authenticated(Principal),
}

impl Actor {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(principal) => Some(principal),
        }
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.principal().is_some_and(Principal::is_admin)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::Authenticated(Principal::from(user))
    }
}
