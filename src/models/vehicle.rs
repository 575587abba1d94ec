//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle. La tarifa diaria se guarda
//! como entero en la unidad mínima de moneda (céntimos) para evitar
//! redondeos de coma flotante; el formateo es cosa de la presentación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Tarifa diaria en céntimos
    pub daily_rate: i64,
    pub seats: i32,
    pub fuel_type: String,
    pub transmission: String,
    /// Flag manual del dueño, independiente del estado de reservas
    pub is_available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
