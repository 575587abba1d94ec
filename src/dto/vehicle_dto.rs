use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Distingue campo ausente (None) de campo en null (Some(None))
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1980, max = 2100))]
    pub year: i32,

    /// Tarifa diaria en céntimos
    #[validate(range(min = 1))]
    pub daily_rate: i64,

    #[validate(range(min = 1, max = 60))]
    pub seats: i32,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 20))]
    pub transmission: String,

    #[validate(url)]
    pub image_url: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1980, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 1))]
    pub daily_rate: Option<i64>,

    #[validate(range(min = 1, max = 60))]
    pub seats: Option<i32>,

    #[validate(length(min = 1, max = 20))]
    pub fuel_type: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub transmission: Option<String>,

    /// Flag manual de disponibilidad
    pub is_available: Option<bool>,

    /// Ausente conserva la imagen actual; null la borra
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
}

// Parámetros de búsqueda de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub make: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub min_seats: Option<i32>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub agency_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub daily_rate: i64,
    pub seats: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub is_available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            agency_id: v.agency_id,
            make: v.make,
            model: v.model,
            year: v.year,
            daily_rate: v.daily_rate,
            seats: v.seats,
            fuel_type: v.fuel_type,
            transmission: v.transmission,
            is_available: v.is_available,
            image_url: v.image_url,
            created_at: v.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_absent_image_keeps_current() {
        let request: UpdateVehicleRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_update_request_null_image_clears() {
        let request: UpdateVehicleRequest =
            serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert_eq!(request.image_url, Some(None));
    }

    #[test]
    fn test_update_request_image_url_replaces() {
        let request: UpdateVehicleRequest =
            serde_json::from_str(r#"{"image_url": "https://cdn.example.com/coche.jpg"}"#).unwrap();
        assert_eq!(
            request.image_url,
            Some(Some("https://cdn.example.com/coche.jpg".to_string()))
        );
    }
}
