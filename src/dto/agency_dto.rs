use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::agency::{Agency, VerificationStatus};

// Request para enviar (o reenviar) una agencia a verificación
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitAgencyRequest {
    #[validate(length(min = 2, max = 255))]
    pub agency_name: String,

    #[validate(length(min = 5, max = 500))]
    pub address: String,

    pub phone: Option<String>,

    /// URLs de documentos ya subidos al almacenamiento de objetos;
    /// aquí solo se guardan las cadenas. Obligatorias tanto en el
    /// alta como en el reenvío tras un rechazo.
    #[validate(url)]
    pub trade_register_url: String,

    #[validate(url)]
    pub id_document_url: String,
}

// Request de rechazo de una agencia por un admin
#[derive(Debug, Deserialize, Validate)]
pub struct RejectAgencyRequest {
    #[validate(length(min = 3, max = 1000))]
    pub reason: String,
}

// Response de agencia
#[derive(Debug, Serialize)]
pub struct AgencyResponse {
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

impl From<Agency> for AgencyResponse {
    fn from(agency: Agency) -> Self {
        Self {
            id: agency.id,
            owner_id: agency.owner_id,
            agency_name: agency.agency_name,
            address: agency.address,
            phone: agency.phone,
            verification_status: agency.verification_status,
            rejection_reason: agency.rejection_reason,
            trade_register_url: agency.trade_register_url,
            id_document_url: agency.id_document_url,
            created_at: agency.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> serde_json::Value {
        json!({
            "agency_name": "Autos del Sur",
            "address": "Calle Mayor 1, Sevilla",
            "trade_register_url": "https://storage.example.com/docs/registro.pdf",
            "id_document_url": "https://storage.example.com/docs/dni.pdf"
        })
    }

    #[test]
    fn test_submit_request_valid() {
        let request: SubmitAgencyRequest =
            serde_json::from_value(valid_request()).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_submit_request_without_documents_rejected() {
        // Sin documentos no hay alta ni reenvío posible
        let mut body = valid_request();
        body.as_object_mut().unwrap().remove("trade_register_url");
        body.as_object_mut().unwrap().remove("id_document_url");

        let result = serde_json::from_value::<SubmitAgencyRequest>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_submit_request_null_document_rejected() {
        let mut body = valid_request();
        body["id_document_url"] = serde_json::Value::Null;

        let result = serde_json::from_value::<SubmitAgencyRequest>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_submit_request_malformed_document_url_rejected() {
        let mut body = valid_request();
        body["trade_register_url"] = json!("no-es-una-url");

        let request: SubmitAgencyRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }
}
