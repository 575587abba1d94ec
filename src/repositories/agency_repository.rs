//! Repositorio de agencias
//!
//! Persistencia de agencias y de sus transiciones de verificación.
//! Las transiciones se validan antes en el servicio de verificación;
//! aquí solo se escribe el estado resultante.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::agency::{Agency, VerificationStatus};
use crate::utils::errors::AppError;

pub struct AgencyRepository {
    pool: PgPool,
}

impl AgencyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, agency: &Agency) -> Result<Agency, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            r#"
            INSERT INTO agencies (
                id, owner_id, agency_name, address, phone, verification_status,
                rejection_reason, trade_register_url, id_document_url, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#
        )
        .bind(agency.id)
        .bind(agency.owner_id)
        .bind(&agency.agency_name)
        .bind(&agency.address)
        .bind(&agency.phone)
        .bind(agency.verification_status)
        .bind(&agency.rejection_reason)
        .bind(&agency.trade_register_url)
        .bind(&agency.id_document_url)
        .bind(agency.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating agency: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Agency>, AppError> {
        let result = sqlx::query_as::<_, Agency>("SELECT * FROM agencies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding agency: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Agency>, AppError> {
        let result = sqlx::query_as::<_, Agency>("SELECT * FROM agencies WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding agency by owner: {}", e)))?;

        Ok(result)
    }

    /// Escribir el resultado de una transición de verificación
    pub async fn set_verification_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
        rejection_reason: Option<String>,
    ) -> Result<Agency, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            r#"
            UPDATE agencies
            SET verification_status = $2, rejection_reason = $3
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(status)
        .bind(rejection_reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating verification status: {}", e)))?;

        Ok(result)
    }

    /// Reenvío del dueño: nuevos documentos obligatorios, estado
    /// pending y motivo limpio
    pub async fn resubmit(
        &self,
        id: Uuid,
        agency_name: String,
        address: String,
        phone: Option<String>,
        trade_register_url: String,
        id_document_url: String,
    ) -> Result<Agency, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            r#"
            UPDATE agencies
            SET agency_name = $2, address = $3, phone = $4,
                trade_register_url = $5, id_document_url = $6,
                verification_status = 'pending', rejection_reason = NULL
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(agency_name)
        .bind(address)
        .bind(phone)
        .bind(trade_register_url)
        .bind(id_document_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error resubmitting agency: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Agency>, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            "SELECT * FROM agencies ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing agencies: {}", e)))?;

        Ok(result)
    }

    /// Cola de revisión: las más antiguas primero
    pub async fn list_pending(&self) -> Result<Vec<Agency>, AppError> {
        let result = sqlx::query_as::<_, Agency>(
            "SELECT * FROM agencies WHERE verification_status = 'pending' ORDER BY created_at ASC"
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing pending agencies: {}", e)))?;

        Ok(result)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM agencies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error counting agencies: {}", e)))?;

        Ok(result.0)
    }
}
