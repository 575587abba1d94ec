use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::profile::{Profile, UserRole};

// Request de registro
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 255))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8))]
    pub password: String,

    pub phone: Option<String>,

    /// true para registrarse como dueño de agencia; el rol admin
    /// nunca se asigna por registro
    #[serde(default)]
    pub as_agency_owner: bool,
}

// Request de actualización del propio perfil
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 255))]
    pub full_name: Option<String>,

    pub phone: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub profile_id: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

impl LoginResponse {
    pub fn success(token: String, profile_id: String, full_name: String, role: UserRole) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            profile_id: Some(profile_id),
            full_name: Some(full_name),
            role: Some(role),
        }
    }
}

// Response de perfil (sin password_hash)
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            email: profile.email,
            phone: profile.phone,
            avatar_url: profile.avatar_url,
            role: profile.role,
            is_suspended: profile.is_suspended,
            created_at: profile.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_update_profile_request_partial_valid() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"full_name": "Marta Ruiz"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.avatar_url, None);
    }

    #[test]
    fn test_update_profile_request_short_name_rejected() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"full_name": "M"}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_profile_request_malformed_avatar_rejected() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"avatar_url": "no-es-una-url"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
