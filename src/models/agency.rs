//! Modelo de Agency
//!
//! Una agencia pertenece a exactamente un perfil (owner_id UNIQUE).
//! Su estado de verificación controla si sus vehículos son visibles
//! y reservables públicamente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de verificación de una agencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

/// Agency principal - mapea exactamente a la tabla agencies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agency {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub agency_name: String,
    pub address: String,
    pub phone: Option<String>,
    pub verification_status: VerificationStatus,
    pub rejection_reason: Option<String>,
    pub trade_register_url: Option<String>,
    pub id_document_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Agency {
    /// Crear una agencia nueva en estado pending
    pub fn new(
        owner_id: Uuid,
        agency_name: String,
        address: String,
        phone: Option<String>,
        trade_register_url: Option<String>,
        id_document_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            agency_name,
            address,
            phone,
            verification_status: VerificationStatus::Pending,
            rejection_reason: None,
            trade_register_url,
            id_document_url,
            created_at: Utc::now(),
        }
    }
}
