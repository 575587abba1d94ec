//! Controladores de la API
//!
//! Validación y orquestación por dominio; el SQL vive en los
//! repositorios y la lógica pura en los servicios.

pub mod admin_controller;
pub mod agency_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod vehicle_controller;
