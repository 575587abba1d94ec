use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::agency_dto::{AgencyResponse, RejectAgencyRequest, SubmitAgencyRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::agency::Agency;
use crate::models::profile::UserRole;
use crate::repositories::agency_repository::AgencyRepository;
use crate::services::verification_service::{self, Caller, VerificationAction};
use crate::utils::errors::AppError;

pub struct AgencyController {
    repository: AgencyRepository,
}

impl AgencyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AgencyRepository::new(pool),
        }
    }

    /// Alta o reenvío de una agencia por su dueño
    ///
    /// Sin agencia previa: se crea en pending. Con agencia rechazada:
    /// la máquina de estados valida el reenvío, que limpia el motivo
    /// y exige reenviar los documentos. Con agencia pending o
    /// verified: conflicto.
    pub async fn submit(
        &self,
        owner: AuthUser,
        request: SubmitAgencyRequest,
    ) -> Result<ApiResponse<AgencyResponse>, AppError> {
        request.validate()?;

        if owner.role != UserRole::AgencyOwner {
            return Err(AppError::Forbidden(
                "Solo una cuenta de agencia puede registrar una agencia".to_string(),
            ));
        }

        match self.repository.find_by_owner(owner.profile_id).await? {
            None => {
                let agency = Agency::new(
                    owner.profile_id,
                    request.agency_name,
                    request.address,
                    request.phone,
                    Some(request.trade_register_url),
                    Some(request.id_document_url),
                );

                let saved = self.repository.create(&agency).await?;

                Ok(ApiResponse::success_with_message(
                    AgencyResponse::from(saved),
                    "Agencia enviada a verificación".to_string(),
                ))
            }
            Some(existing) => {
                // Reenvío: la máquina de estados decide si es legal
                verification_service::apply(
                    existing.verification_status,
                    VerificationAction::Resubmit,
                    Caller { role: owner.role, is_owner: true },
                )?;

                let updated = self.repository.resubmit(
                    existing.id,
                    request.agency_name,
                    request.address,
                    request.phone,
                    request.trade_register_url,
                    request.id_document_url,
                ).await?;

                Ok(ApiResponse::success_with_message(
                    AgencyResponse::from(updated),
                    "Solicitud reenviada a verificación".to_string(),
                ))
            }
        }
    }

    pub async fn my_agency(&self, owner_id: Uuid) -> Result<AgencyResponse, AppError> {
        let agency = self.repository
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No tienes una agencia registrada".to_string()))?;

        Ok(AgencyResponse::from(agency))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AgencyResponse, AppError> {
        let agency = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        Ok(AgencyResponse::from(agency))
    }

    /// Transición pending -> verified (solo admin). Al verificar, los
    /// vehículos de la agencia entran en el índice de disponibilidad.
    pub async fn verify(
        &self,
        admin: AuthUser,
        agency_id: Uuid,
    ) -> Result<ApiResponse<AgencyResponse>, AppError> {
        let agency = self.repository
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        let transition = verification_service::apply(
            agency.verification_status,
            VerificationAction::Verify,
            Caller { role: admin.role, is_owner: false },
        )?;

        let updated = self.repository
            .set_verification_status(agency_id, transition.next, transition.rejection_reason)
            .await?;

        Ok(ApiResponse::success_with_message(
            AgencyResponse::from(updated),
            "Agencia verificada".to_string(),
        ))
    }

    /// Transición pending -> rejected con motivo obligatorio (solo admin)
    pub async fn reject(
        &self,
        admin: AuthUser,
        agency_id: Uuid,
        request: RejectAgencyRequest,
    ) -> Result<ApiResponse<AgencyResponse>, AppError> {
        request.validate()?;

        let agency = self.repository
            .find_by_id(agency_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agencia no encontrada".to_string()))?;

        let transition = verification_service::apply(
            agency.verification_status,
            VerificationAction::Reject { reason: request.reason },
            Caller { role: admin.role, is_owner: false },
        )?;

        let updated = self.repository
            .set_verification_status(agency_id, transition.next, transition.rejection_reason)
            .await?;

        Ok(ApiResponse::success_with_message(
            AgencyResponse::from(updated),
            "Agencia rechazada".to_string(),
        ))
    }

    pub async fn list_all(&self) -> Result<Vec<AgencyResponse>, AppError> {
        let agencies = self.repository.list_all().await?;
        Ok(agencies.into_iter().map(AgencyResponse::from).collect())
    }

    /// Agencias pendientes de revisión para el dashboard de admin
    pub async fn list_pending(&self) -> Result<Vec<AgencyResponse>, AppError> {
        let agencies = self.repository.list_pending().await?;
        Ok(agencies.into_iter().map(AgencyResponse::from).collect())
    }
}
