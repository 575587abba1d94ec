//! Modelo de Booking
//!
//! Las reservas nacen confirmadas y nunca se borran; la única mutación
//! posterior es la transición confirmed -> cancelled. La fecha de fin
//! es EXCLUSIVA: el intervalo reservado es [start_date, end_date).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    /// Exclusiva: el vehículo queda libre este día
    pub end_date: NaiveDate,
    /// Precio total en céntimos, calculado al crear e inmutable después
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
