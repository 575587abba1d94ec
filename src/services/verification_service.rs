//! Máquina de estados de verificación de agencias
//!
//! pending -> verified | rejected (solo admin, rejected exige motivo)
//! rejected -> pending (solo el dueño, al reenviar documentación)
//! verified es terminal: no existe camino de revocación.
//!
//! La transición es una función pura del estado actual, la acción y la
//! identidad inyectada del llamante; el efecto colateral (visibilidad
//! en el índice de disponibilidad) lo aplica la consulta por sí sola.

use crate::models::agency::VerificationStatus;
use crate::models::profile::UserRole;
use crate::utils::errors::AppError;

/// Acción solicitada sobre el estado de verificación
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationAction {
    /// Admin aprueba la agencia
    Verify,
    /// Admin rechaza la agencia con un motivo obligatorio
    Reject { reason: String },
    /// El dueño reenvía la solicitud desde rejected
    Resubmit,
}

/// Identidad del llamante, pasada explícitamente a cada operación
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub role: UserRole,
    pub is_owner: bool,
}

/// Resultado de una transición válida
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: VerificationStatus,
    /// Motivo de rechazo resultante (Some solo en rejected)
    pub rejection_reason: Option<String>,
}

/// Aplicar una acción al estado actual, con los guards de rol/propiedad
pub fn apply(
    current: VerificationStatus,
    action: VerificationAction,
    caller: Caller,
) -> Result<Transition, AppError> {
    match action {
        VerificationAction::Verify => {
            if caller.role != UserRole::Admin {
                return Err(AppError::Forbidden(
                    "Solo un administrador puede verificar agencias".to_string(),
                ));
            }
            if current != VerificationStatus::Pending {
                return Err(AppError::Conflict(format!(
                    "No se puede verificar una agencia en estado '{}'",
                    current.as_str()
                )));
            }
            Ok(Transition {
                next: VerificationStatus::Verified,
                rejection_reason: None,
            })
        }

        VerificationAction::Reject { reason } => {
            if caller.role != UserRole::Admin {
                return Err(AppError::Forbidden(
                    "Solo un administrador puede rechazar agencias".to_string(),
                ));
            }
            if current != VerificationStatus::Pending {
                return Err(AppError::Conflict(format!(
                    "No se puede rechazar una agencia en estado '{}'",
                    current.as_str()
                )));
            }
            if reason.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "El rechazo requiere un motivo".to_string(),
                ));
            }
            Ok(Transition {
                next: VerificationStatus::Rejected,
                rejection_reason: Some(reason),
            })
        }

        VerificationAction::Resubmit => {
            if !caller.is_owner {
                return Err(AppError::Forbidden(
                    "Solo el dueño de la agencia puede reenviar la solicitud".to_string(),
                ));
            }
            if current != VerificationStatus::Rejected {
                return Err(AppError::Conflict(format!(
                    "Solo se puede reenviar desde 'rejected', no desde '{}'",
                    current.as_str()
                )));
            }
            // El reenvío limpia el motivo de rechazo
            Ok(Transition {
                next: VerificationStatus::Pending,
                rejection_reason: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Caller {
        Caller { role: UserRole::Admin, is_owner: false }
    }

    fn owner() -> Caller {
        Caller { role: UserRole::AgencyOwner, is_owner: true }
    }

    fn stranger() -> Caller {
        Caller { role: UserRole::Renter, is_owner: false }
    }

    #[test]
    fn test_admin_verifies_pending_agency() {
        let t = apply(VerificationStatus::Pending, VerificationAction::Verify, admin()).unwrap();
        assert_eq!(t.next, VerificationStatus::Verified);
        assert_eq!(t.rejection_reason, None);
    }

    #[test]
    fn test_reject_requires_reason() {
        let err = apply(
            VerificationStatus::Pending,
            VerificationAction::Reject { reason: "   ".to_string() },
            admin(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_reject_then_resubmit_clears_reason() {
        // Rechazo con motivo "missing trade register"
        let rejected = apply(
            VerificationStatus::Pending,
            VerificationAction::Reject { reason: "missing trade register".to_string() },
            admin(),
        )
        .unwrap();
        assert_eq!(rejected.next, VerificationStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("missing trade register"));

        // El dueño reenvía: vuelve a pending y el motivo se limpia
        let resubmitted = apply(rejected.next, VerificationAction::Resubmit, owner()).unwrap();
        assert_eq!(resubmitted.next, VerificationStatus::Pending);
        assert_eq!(resubmitted.rejection_reason, None);
    }

    #[test]
    fn test_only_admin_can_verify_or_reject() {
        assert!(apply(VerificationStatus::Pending, VerificationAction::Verify, owner()).is_err());
        assert!(apply(VerificationStatus::Pending, VerificationAction::Verify, stranger()).is_err());
        assert!(apply(
            VerificationStatus::Pending,
            VerificationAction::Reject { reason: "x".to_string() },
            owner(),
        )
        .is_err());
    }

    #[test]
    fn test_only_owner_can_resubmit() {
        assert!(apply(VerificationStatus::Rejected, VerificationAction::Resubmit, admin()).is_err());
        assert!(apply(VerificationStatus::Rejected, VerificationAction::Resubmit, stranger()).is_err());
    }

    #[test]
    fn test_verified_is_terminal() {
        assert!(apply(VerificationStatus::Verified, VerificationAction::Verify, admin()).is_err());
        assert!(apply(
            VerificationStatus::Verified,
            VerificationAction::Reject { reason: "x".to_string() },
            admin(),
        )
        .is_err());
        assert!(apply(VerificationStatus::Verified, VerificationAction::Resubmit, owner()).is_err());
    }

    #[test]
    fn test_cannot_resubmit_from_pending() {
        assert!(apply(VerificationStatus::Pending, VerificationAction::Resubmit, owner()).is_err());
    }
}
