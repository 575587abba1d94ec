//! Repositorio de vehículos
//!
//! CRUD de vehículos y el índice de disponibilidad: una sola consulta
//! que filtra por agencia verificada, flag manual y ausencia de
//! reservas confirmadas solapadas. Nunca se filtran reservas en el
//! cliente.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

/// Filtros opcionales de búsqueda sobre el catálogo disponible
#[derive(Debug, Default, Clone)]
pub struct VehicleFilters {
    pub make: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub min_seats: Option<i32>,
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        agency_id: Uuid,
        make: String,
        model: String,
        year: i32,
        daily_rate: i64,
        seats: i32,
        fuel_type: String,
        transmission: String,
        image_url: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, agency_id, make, model, year, daily_rate, seats, fuel_type, transmission, is_available, image_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, TRUE, $10, $11)
            RETURNING *
            "#
        )
        .bind(id)
        .bind(agency_id)
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(daily_rate)
        .bind(seats)
        .bind(fuel_type)
        .bind(transmission)
        .bind(image_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE agency_id = $1 ORDER BY created_at DESC"
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    /// Índice de disponibilidad: vehículos libres para [start, end)
    ///
    /// Un vehículo está disponible iff su agencia está 'verified', su
    /// flag manual está activo y no existe reserva confirmada B con
    /// B.start_date < end AND B.end_date > start. Lectura consistente
    /// en una sola consulta contra el conjunto de reservas commiteado.
    pub async fn find_available(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        filters: &VehicleFilters,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.*
            FROM vehicles v
            JOIN agencies a ON a.id = v.agency_id
            WHERE a.verification_status = 'verified'
              AND v.is_available = TRUE
              AND NOT EXISTS (
                  SELECT 1 FROM bookings b
                  WHERE b.vehicle_id = v.id
                    AND b.status = 'confirmed'
                    AND b.start_date < $2
                    AND b.end_date > $1
              )
              AND ($3::varchar IS NULL OR v.make = $3)
              AND ($4::varchar IS NULL OR v.fuel_type = $4)
              AND ($5::varchar IS NULL OR v.transmission = $5)
              AND ($6::int IS NULL OR v.seats >= $6)
            ORDER BY v.daily_rate ASC
            "#
        )
        .bind(start)
        .bind(end)
        .bind(filters.make.as_deref())
        .bind(filters.fuel_type.as_deref())
        .bind(filters.transmission.as_deref())
        .bind(filters.min_seats)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error searching available vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        agency_id: Uuid,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        daily_rate: Option<i64>,
        seats: Option<i32>,
        fuel_type: Option<String>,
        transmission: Option<String>,
        is_available: Option<bool>,
        image_url: Option<Option<String>>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual
        let current = self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Verificar que pertenece a la agencia
        if current.agency_id != agency_id {
            return Err(AppError::Forbidden("El vehículo no pertenece a esta agencia".to_string()));
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = $2, model = $3, year = $4, daily_rate = $5, seats = $6,
                fuel_type = $7, transmission = $8, is_available = $9, image_url = $10
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(daily_rate.unwrap_or(current.daily_rate))
        .bind(seats.unwrap_or(current.seats))
        .bind(fuel_type.unwrap_or(current.fuel_type))
        .bind(transmission.unwrap_or(current.transmission))
        .bind(is_available.unwrap_or(current.is_available))
        // Un null explícito borra la imagen; el campo ausente la conserva
        .bind(image_url.unwrap_or(current.image_url))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid, agency_id: Uuid) -> Result<(), AppError> {
        // Verificar que pertenece a la agencia
        let vehicle = self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if vehicle.agency_id != agency_id {
            return Err(AppError::Forbidden("El vehículo no pertenece a esta agencia".to_string()));
        }

        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting vehicle: {}", e)))?;

        Ok(())
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting vehicles: {}", e)))?;

        Ok(result.0)
    }
}
