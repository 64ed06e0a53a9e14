use cloudcert_core::error::AppError;

use crate::models::{Role, User};
use crate::seed;

/// Mock identity holder. Logging in substitutes one of the two fixed records
/// wholesale; there is no credential check, token, or expiry.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn login(&mut self, role: Role) -> &User {
        let user = seed::user_for(role);
        tracing::info!(user = %user.name, role = role.as_str(), "User logged in");
        &*self.user.insert(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.name, "User logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn require_user(&self) -> Result<&User, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::Unauthorized(anyhow::anyhow!("No user is logged in")))
    }

    pub fn require_role(&self, role: Role) -> Result<&User, AppError> {
        let user = self.require_user()?;
        if user.role != role {
            return Err(AppError::Forbidden(anyhow::anyhow!(
                "This operation requires the {} role",
                role.as_str()
            )));
        }
        Ok(user)
    }
}
