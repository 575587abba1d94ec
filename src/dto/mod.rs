//! DTOs de la API
//!
//! Requests y responses por dominio, separados de los modelos de tabla.

pub mod admin_dto;
pub mod agency_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod vehicle_dto;
