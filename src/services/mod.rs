//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación:
//! disponibilidad, precios y la máquina de estados de verificación.
//! Los servicios no tocan la base de datos; las consultas viven en
//! los repositorios.

pub mod availability_service;
pub mod pricing_service;
pub mod verification_service;
