//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla; cada uno posee el pool y encapsula el SQL.

pub mod agency_repository;
pub mod booking_repository;
pub mod profile_repository;
pub mod vehicle_repository;
