//! Middleware de la aplicación
//!
//! CORS y extractores de autenticación/autorización.

pub mod auth;
pub mod cors;
