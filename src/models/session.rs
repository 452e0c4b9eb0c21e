// ============================================================================
// SESSION - Authenticated user as persisted in the credential store
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Role tag issued by the backend at login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    LogisticPerson,
    SecurityGuard,
    Munshi,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::LogisticPerson, Role::SecurityGuard, Role::Munshi];

    /// Parses a backend slug. The backend spells the guard slug
    /// `security_gaurd`; the corrected spelling is accepted too.
    pub fn from_slug(slug: &str) -> Result<Self, AppError> {
        match slug.trim() {
            "logistic_person" => Ok(Role::LogisticPerson),
            "security_gaurd" | "security_guard" | "security" => Ok(Role::SecurityGuard),
            "Munshi" | "munshi" => Ok(Role::Munshi),
            other => Err(AppError::UnknownRole(other.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::LogisticPerson => "Logistics",
            Role::SecurityGuard => "Security",
            Role::Munshi => "Munshi",
        }
    }
}

/// A usable session. Only ever built from a token whose `exp` was decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub auth_token: String,
    pub role: Role,
    /// Slug exactly as the backend issued it; echoed to the list endpoint
    pub role_slug: String,
    pub user_id: String,
    /// Seconds since the Unix epoch
    pub expires_at: i64,
}

impl Session {
    pub fn is_expired_at(&self, now: i64) -> bool {
        crate::utils::jwt::is_expired(self.expires_at, now)
    }
}
