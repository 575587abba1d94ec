use serde::{Deserialize, Serialize};

// Request para suspender o reactivar un usuario
#[derive(Debug, Deserialize)]
pub struct SuspendRequest {
    pub suspended: bool,
}

// Estadísticas de la plataforma para el dashboard de admin
#[derive(Debug, Serialize)]
pub struct PlatformStatsResponse {
    pub users: i64,
    pub agencies: i64,
    pub bookings: i64,
    pub listings: i64,
    /// Ingresos confirmados en céntimos
    pub revenue: i64,
}
