use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{AvailabilityQuery, CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::vehicle_repository::{VehicleFilters, VehicleRepository};
use crate::services::availability_service;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
    agency_repository: AgencyRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool),
        }
    }

    /// Índice de disponibilidad: vehículos libres para [start, end)
    pub async fn search_available(
        &self,
        query: AvailabilityQuery,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        // Rechazar rangos malformados antes de tocar la base de datos
        availability_service::validate_date_range(query.start_date, query.end_date)?;

        let filters = VehicleFilters {
            make: query.make,
            fuel_type: query.fuel_type,
            transmission: query.transmission,
            min_seats: query.min_seats,
        };

        let vehicles = self.repository
            .find_available(query.start_date, query.end_date, &filters)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    async fn owner_agency_id(&self, owner_id: Uuid) -> Result<Uuid, AppError> {
        let agency = self.agency_repository
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No tienes una agencia registrada".to_string()))?;

        Ok(agency.id)
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // El CRUD se permite con la agencia en cualquier estado;
        // el índice de disponibilidad filtra por agencia verificada
        let agency_id = self.owner_agency_id(owner_id).await?;

        let vehicle = self.repository.create(
            agency_id,
            request.make,
            request.model,
            request.year,
            request.daily_rate,
            request.seats,
            request.fuel_type,
            request.transmission,
            request.image_url,
        ).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn list_own(&self, owner_id: Uuid) -> Result<Vec<VehicleResponse>, AppError> {
        let agency_id = self.owner_agency_id(owner_id).await?;
        let vehicles = self.repository.find_by_agency(agency_id).await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let agency_id = self.owner_agency_id(owner_id).await?;

        let vehicle = self.repository.update(
            id,
            agency_id,
            request.make,
            request.model,
            request.year,
            request.daily_rate,
            request.seats,
            request.fuel_type,
            request.transmission,
            request.is_available,
            request.image_url,
        ).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<(), AppError> {
        let agency_id = self.owner_agency_id(owner_id).await?;
        self.repository.delete(id, agency_id).await?;
        Ok(())
    }
}
