//! Repositorio de perfiles
//!
//! Búsquedas de autenticación, suspensión y listado de usuarios
//! para la superficie de administración.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::profile::Profile;
use crate::utils::errors::AppError;

pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> Result<Profile, AppError> {
        let result = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, full_name, email, password_hash, phone, avatar_url, role, is_suspended, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#
        )
        .bind(profile.id)
        .bind(&profile.full_name)
        .bind(&profile.email)
        .bind(&profile.password_hash)
        .bind(&profile.phone)
        .bind(&profile.avatar_url)
        .bind(profile.role)
        .bind(profile.is_suspended)
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating profile: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let result = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding profile: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        let result = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding profile by email: {}", e)))?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)"
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking email: {}", e)))?;

        Ok(result.0)
    }

    /// Actualización del propio perfil: los campos ausentes conservan
    /// su valor actual
    pub async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<String>,
        phone: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Profile, AppError> {
        let current = self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Perfil no encontrado".to_string()))?;

        let result = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET full_name = $2, phone = $3, avatar_url = $4
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(phone.or(current.phone))
        .bind(avatar_url.or(current.avatar_url))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating profile: {}", e)))?;

        Ok(result)
    }

    /// Marcar o desmarcar la suspensión de un perfil
    pub async fn set_suspended(&self, id: Uuid, suspended: bool) -> Result<Profile, AppError> {
        let result = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_suspended = $2
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(suspended)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating suspension: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Profile>, AppError> {
        let result = sqlx::query_as::<_, Profile>(
            "SELECT * FROM profiles ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing profiles: {}", e)))?;

        Ok(result)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting profiles: {}", e)))?;

        Ok(result.0)
    }
}
