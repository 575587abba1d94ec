//! Repositorio de reservas
//!
//! La escritura es un INSERT guardado: re-chequea la disponibilidad y
//! escribe en una sola sentencia atómica; la restricción de exclusión
//! de la tabla (bookings_no_overlap) cierra cualquier carrera entre
//! escritores concurrentes que el chequeo optimista no alcanzara.
//! Las reservas nunca se borran.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::AppError;

/// Código SQLSTATE de violación de restricción de exclusión
const EXCLUSION_VIOLATION: &str = "23P01";

/// Reserva con los datos del vehículo y del inquilino ya unidos
#[derive(Debug, sqlx::FromRow, serde::Serialize)]
pub struct BookingWithDetails {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub agency_name: String,
    pub renter_name: String,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una reserva confirmada solo si el vehículo sigue
    /// disponible para [start, end) en el momento de la escritura.
    ///
    /// Devuelve None si el vehículo perdió la disponibilidad (carrera
    /// perdida, solapamiento nuevo, flag apagado o agencia ya no
    /// verificada). El chequeo y el insert son una única sentencia;
    /// si aun así dos inserts concurrentes pasan el guard, la
    /// restricción de exclusión aborta el segundo y se mapea al mismo
    /// resultado.
    pub async fn create_guarded(
        &self,
        vehicle_id: Uuid,
        renter_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        total_price: i64,
    ) -> Result<Option<Booking>, AppError> {
        let id = Uuid::new_v4();

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, vehicle_id, renter_id, start_date, end_date, total_price, status, created_at)
            SELECT $1, v.id, $3, $4, $5, $6, 'confirmed', $7
            FROM vehicles v
            JOIN agencies a ON a.id = v.agency_id
            WHERE v.id = $2
              AND v.is_available = TRUE
              AND a.verification_status = 'verified'
              AND NOT EXISTS (
                  SELECT 1 FROM bookings b
                  WHERE b.vehicle_id = v.id
                    AND b.status = 'confirmed'
                    AND b.start_date < $5
                    AND b.end_date > $4
              )
            RETURNING *
            "#
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(renter_id)
        .bind(start)
        .bind(end)
        .bind(total_price)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(EXCLUSION_VIOLATION) => {
                AppError::VehicleUnavailable(
                    "El vehículo ya está reservado para esas fechas".to_string(),
                )
            }
            _ => AppError::DatabaseError(format!("Error creating booking: {}", e)),
        })?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_renter(&self, renter_id: Uuid) -> Result<Vec<BookingWithDetails>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithDetails>(
            r#"
            SELECT b.*, v.make AS vehicle_make, v.model AS vehicle_model,
                   a.agency_name, p.full_name AS renter_name
            FROM bookings b
            JOIN vehicles v ON v.id = b.vehicle_id
            JOIN agencies a ON a.id = v.agency_id
            JOIN profiles p ON p.id = b.renter_id
            WHERE b.renter_id = $1
            ORDER BY b.start_date DESC
            "#
        )
        .bind(renter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing renter bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Reservas sobre los vehículos de una agencia, con vehículo e
    /// inquilino unidos (vista del dueño)
    pub async fn find_by_agency(&self, agency_id: Uuid) -> Result<Vec<BookingWithDetails>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithDetails>(
            r#"
            SELECT b.*, v.make AS vehicle_make, v.model AS vehicle_model,
                   a.agency_name, p.full_name AS renter_name
            FROM bookings b
            JOIN vehicles v ON v.id = b.vehicle_id
            JOIN agencies a ON a.id = v.agency_id
            JOIN profiles p ON p.id = b.renter_id
            WHERE v.agency_id = $1
            ORDER BY b.start_date DESC
            "#
        )
        .bind(agency_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing agency bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Todas las reservas de la plataforma (vista de admin)
    pub async fn find_all(&self) -> Result<Vec<BookingWithDetails>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithDetails>(
            r#"
            SELECT b.*, v.make AS vehicle_make, v.model AS vehicle_model,
                   a.agency_name, p.full_name AS renter_name
            FROM bookings b
            JOIN vehicles v ON v.id = b.vehicle_id
            JOIN agencies a ON a.id = v.agency_id
            JOIN profiles p ON p.id = b.renter_id
            ORDER BY b.created_at DESC
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    /// Transición confirmed -> cancelled; única mutación permitida
    pub async fn cancel(&self, id: Uuid) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = 'cancelled'
            WHERE id = $1 AND status = 'confirmed'
            RETURNING *
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error cancelling booking: {}", e)))?
        .ok_or_else(|| AppError::Conflict("La reserva no está confirmada".to_string()))?;

        Ok(booking)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting bookings: {}", e)))?;

        Ok(result.0)
    }

    /// Ingresos confirmados de la plataforma, en céntimos
    pub async fn confirmed_revenue(&self) -> Result<i64, AppError> {
        let result: (Option<i64>,) = sqlx::query_as(
            "SELECT SUM(total_price) FROM bookings WHERE status = 'confirmed'"
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error computing revenue: {}", e)))?;

        Ok(result.0.unwrap_or(0))
    }
}
