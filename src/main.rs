mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Kriya Rental - Marketplace de alquiler de coches");
    info!("===================================================");

    // Inicializar base de datos (aplica migraciones)
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let config = EnvironmentConfig::default();

    // CORS restringido en producción, permisivo en desarrollo
    let cors = if config.is_production() {
        middleware::cors::cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/agency", routes::agency_routes::create_agency_router())
        .nest("/api/admin", routes::admin_routes::create_admin_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Crear cuenta");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil actual");
    info!("   PUT  /api/auth/me - Actualizar perfil");
    info!("🚗 Vehicle:");
    info!("   GET  /api/vehicle/search - Buscar disponibles por rango de fechas");
    info!("   GET  /api/vehicle/:id/quote - Cotizar precio");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   POST /api/vehicle - Crear vehículo (dueño)");
    info!("   GET  /api/vehicle - Listar vehículos propios (dueño)");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo (dueño)");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (dueño)");
    info!("📅 Booking:");
    info!("   POST /api/booking - Crear reserva");
    info!("   GET  /api/booking - Mis reservas");
    info!("   GET  /api/booking/agency - Reservas de mi agencia");
    info!("   POST /api/booking/:id/cancel - Cancelar reserva");
    info!("🏢 Agency:");
    info!("   POST /api/agency - Enviar/reenviar agencia a verificación");
    info!("   GET  /api/agency/me - Mi agencia");
    info!("🛡️ Admin:");
    info!("   GET  /api/admin/users - Listar usuarios");
    info!("   PUT  /api/admin/users/:id/suspend - Suspender/reactivar usuario");
    info!("   GET  /api/admin/agencies - Listar agencias");
    info!("   POST /api/admin/agencies/:id/verify - Verificar agencia");
    info!("   POST /api/admin/agencies/:id/reject - Rechazar agencia");
    info!("   GET  /api/admin/bookings - Listar todas las reservas");
    info!("   GET  /api/admin/stats - Estadísticas de la plataforma");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "kriya_rental",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
