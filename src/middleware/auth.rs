//! Extractores de autenticación
//!
//! La identidad del llamante se inyecta explícitamente en cada handler
//! como un extractor, en lugar de un estado ambiente global. El
//! extractor relee el perfil en cada petición: un usuario suspendido
//! queda fuera aunque su token siga siendo criptográficamente válido.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::models::profile::UserRole;
use crate::repositories::profile_repository::ProfileRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token};

/// Identidad autenticada del llamante
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub profile_id: Uuid,
    pub role: UserRole,
}

#[async_trait::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Extraer token del header Authorization
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

        let token = extract_token_from_header(auth_header)?;
        let claims = verify_token(token, &state.jwt_config())?;

        let profile_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("Subject del token inválido".to_string()))?;

        // Chequeo de suspensión por petición
        let repository = ProfileRepository::new(state.pool.clone());
        let profile = repository
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("El perfil del token no existe".to_string()))?;

        if profile.is_suspended {
            return Err(AppError::Forbidden("La cuenta está suspendida".to_string()));
        }

        Ok(AuthUser {
            profile_id: profile.id,
            role: profile.role,
        })
    }
}

/// Identidad autenticada con rol de administrador garantizado
#[derive(Debug, Clone, Copy)]
pub struct AdminUser(pub AuthUser);

#[async_trait::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role != UserRole::Admin {
            return Err(AppError::Forbidden(
                "Se requiere rol de administrador".to_string(),
            ));
        }

        Ok(AdminUser(user))
    }
}
