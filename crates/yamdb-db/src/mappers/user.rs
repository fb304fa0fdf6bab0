//! User model -> entity mapper

use yamdb_core::{ConfirmationCode, DomainError, Role, User};

use crate::models::{ConfirmationCodeModel, UserModel};

/// Fails only if the stored role is not a known role
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            role: model.role.parse::<Role>()?,
            is_staff: model.is_staff,
            created_at: model.created_at,
        })
    }
}

impl From<ConfirmationCodeModel> for ConfirmationCode {
    fn from(model: ConfirmationCodeModel) -> Self {
        ConfirmationCode {
            user_id: model.user_id,
            code_hash: model.code_hash,
            expires_at: model.expires_at,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(role: &str) -> UserModel {
        UserModel {
            id: 5,
            username: "critic".to_string(),
            email: "critic@example.com".to_string(),
            first_name: "Ann".to_string(),
            last_name: String::new(),
            bio: String::new(),
            role: role.to_string(),
            is_staff: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_user_from_model() {
        let user = User::try_from(model("moderator")).unwrap();
        assert_eq!(user.id, 5);
        assert_eq!(user.role, Role::Moderator);
        assert_eq!(user.first_name, "Ann");
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(matches!(
            User::try_from(model("root")),
            Err(DomainError::InvalidRole(_))
        ));
    }
}
