//! Modelo de Profile
//!
//! Este módulo contiene el struct Profile y el rol de usuario.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.
//! El rol es una columna de primera clase, resuelta una vez en el login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol de un perfil dentro del marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Renter,
    AgencyOwner,
    Admin,
}

/// Profile principal - mapea exactamente a la tabla profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub is_suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(
        full_name: String,
        email: String,
        password_hash: String,
        phone: Option<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            password_hash,
            phone,
            avatar_url: None,
            role,
            is_suspended: false,
            created_at: Utc::now(),
        }
    }
}
