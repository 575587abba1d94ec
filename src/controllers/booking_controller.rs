use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, QuoteQuery, QuoteResponse};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::profile::UserRole;
use crate::repositories::agency_repository::AgencyRepository;
use crate::repositories::booking_repository::{BookingRepository, BookingWithDetails};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::{availability_service, pricing_service};
use crate::utils::errors::AppError;

pub struct BookingController {
    repository: BookingRepository,
    vehicle_repository: VehicleRepository,
    agency_repository: AgencyRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool.clone()),
            agency_repository: AgencyRepository::new(pool),
        }
    }

    /// Cotización de precio para un vehículo y un rango [start, end)
    pub async fn quote(&self, vehicle_id: Uuid, query: QuoteQuery) -> Result<QuoteResponse, AppError> {
        availability_service::validate_date_range(query.start_date, query.end_date)?;

        let vehicle = self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let days = pricing_service::rental_days(query.start_date, query.end_date);
        let total_price = pricing_service::quote_total(
            vehicle.daily_rate,
            query.start_date,
            query.end_date,
        );

        Ok(QuoteResponse {
            vehicle_id,
            start_date: query.start_date,
            end_date: query.end_date,
            days,
            daily_rate: vehicle.daily_rate,
            total_price,
        })
    }

    /// Crear una reserva confirmada
    ///
    /// Orden del protocolo: validar el rango (nada se escribe si es
    /// inválido), calcular el precio en el servidor sobre la tarifa
    /// actual y re-chequear la disponibilidad en el momento de la
    /// escritura con el INSERT guardado. El resultado del listado que
    /// vio el cliente nunca se reutiliza.
    pub async fn create(
        &self,
        renter: AuthUser,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        availability_service::validate_date_range(request.start_date, request.end_date)?;

        let vehicle = self.vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Precio calculado al crear; inmutable después
        let total_price = pricing_service::quote_total(
            vehicle.daily_rate,
            request.start_date,
            request.end_date,
        );

        let booking = self.repository
            .create_guarded(
                vehicle.id,
                renter.profile_id,
                request.start_date,
                request.end_date,
                total_price,
            )
            .await?
            .ok_or_else(|| AppError::VehicleUnavailable(
                "El vehículo no está disponible para esas fechas".to_string(),
            ))?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva confirmada exitosamente".to_string(),
        ))
    }

    pub async fn list_own(&self, renter_id: Uuid) -> Result<Vec<BookingWithDetails>, AppError> {
        self.repository.find_by_renter(renter_id).await
    }

    /// Reservas sobre los vehículos de la agencia del dueño
    pub async fn list_for_agency(&self, owner_id: Uuid) -> Result<Vec<BookingWithDetails>, AppError> {
        let agency = self.agency_repository
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No tienes una agencia registrada".to_string()))?;

        self.repository.find_by_agency(agency.id).await
    }

    /// Cancelar una reserva: solo el inquilino o un admin
    pub async fn cancel(&self, id: Uuid, caller: AuthUser) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if booking.renter_id != caller.profile_id && caller.role != UserRole::Admin {
            return Err(AppError::Forbidden(
                "No tienes permiso para cancelar esta reserva".to_string(),
            ));
        }

        let cancelled = self.repository.cancel(id).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(cancelled),
            "Reserva cancelada".to_string(),
        ))
    }
}
