use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, UpdateProfileRequest,
};
use crate::dto::common::ApiResponse;
use crate::models::profile::{Profile, UserRole};
use crate::repositories::profile_repository::ProfileRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: ProfileRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: ProfileRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<ApiResponse<ProfileResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        // El rol se fija en el registro; admin nunca se asigna por esta vía
        let role = if request.as_agency_owner {
            UserRole::AgencyOwner
        } else {
            UserRole::Renter
        };

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let profile = Profile::new(
            request.full_name,
            request.email,
            password_hash,
            request.phone,
            role,
        );

        let saved = self.repository.create(&profile).await?;

        Ok(ApiResponse::success_with_message(
            ProfileResponse::from(saved),
            "Cuenta creada exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        // Buscar perfil por email
        let profile = self.repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &profile.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        // Un usuario suspendido no completa el login ni con credenciales correctas
        if profile.is_suspended {
            return Err(AppError::Forbidden(
                "La cuenta está suspendida. Contacta con soporte".to_string(),
            ));
        }

        // Generar JWT token con el rol resuelto
        let token = generate_token(profile.id, profile.role, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            profile.id.to_string(),
            profile.full_name,
            profile.role,
        ))
    }

    pub async fn get_profile(&self, profile_id: Uuid) -> Result<ProfileResponse, AppError> {
        let profile = self.repository
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil no encontrado".to_string()))?;

        Ok(ProfileResponse::from(profile))
    }

    /// Actualizar el propio perfil; email, rol y suspensión no se
    /// tocan por esta vía
    pub async fn update_profile(
        &self,
        profile_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<ApiResponse<ProfileResponse>, AppError> {
        request.validate()?;

        let updated = self.repository
            .update_profile(profile_id, request.full_name, request.phone, request.avatar_url)
            .await?;

        Ok(ApiResponse::success_with_message(
            ProfileResponse::from(updated),
            "Perfil actualizado exitosamente".to_string(),
        ))
    }
}
