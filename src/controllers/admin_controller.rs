use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::admin_dto::PlatformStatsResponse;
use crate::dto::auth_dto::ProfileResponse;
use crate::dto::common::ApiResponse;
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::booking_repository::{BookingRepository, BookingWithDetails};
use crate::repositories::profile_repository::ProfileRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct AdminController {
    profile_repository: ProfileRepository,
    agency_repository: AgencyRepository,
    booking_repository: BookingRepository,
    vehicle_repository: VehicleRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            profile_repository: ProfileRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool.clone()),
            booking_repository: BookingRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<ProfileResponse>, AppError> {
        let profiles = self.profile_repository.list_all().await?;
        Ok(profiles.into_iter().map(ProfileResponse::from).collect())
    }

    pub async fn get_user(&self, id: Uuid) -> Result<ProfileResponse, AppError> {
        let profile = self.profile_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(ProfileResponse::from(profile))
    }

    /// Todas las reservas con vehículo, agencia e inquilino unidos
    pub async fn list_bookings(&self) -> Result<Vec<BookingWithDetails>, AppError> {
        self.booking_repository.find_all().await
    }

    /// Suspender o reactivar una cuenta. La suspensión invalida la
    /// sesión en la práctica: el extractor de autenticación relee el
    /// flag en cada petición.
    pub async fn set_suspended(
        &self,
        id: Uuid,
        suspended: bool,
    ) -> Result<ApiResponse<ProfileResponse>, AppError> {
        // Verificar que existe
        self.profile_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let updated = self.profile_repository.set_suspended(id, suspended).await?;

        let message = if suspended {
            "Usuario suspendido".to_string()
        } else {
            "Usuario reactivado".to_string()
        };

        Ok(ApiResponse::success_with_message(ProfileResponse::from(updated), message))
    }

    /// Estadísticas de la plataforma para el dashboard de admin
    pub async fn platform_stats(&self) -> Result<PlatformStatsResponse, AppError> {
        let users = self.profile_repository.count_all().await?;
        let agencies = self.agency_repository.count_all().await?;
        let bookings = self.booking_repository.count_all().await?;
        let listings = self.vehicle_repository.count_all().await?;
        let revenue = self.booking_repository.confirmed_revenue().await?;

        Ok(PlatformStatsResponse {
            users,
            agencies,
            bookings,
            listings,
            revenue,
        })
    }
}
