use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::controllers::agency_controller::AgencyController;
use crate::dto::admin_dto::{PlatformStatsResponse, SuspendRequest};
use crate::dto::agency_dto::{AgencyResponse, RejectAgencyRequest};
use crate::dto::auth_dto::ProfileResponse;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AdminUser;
use crate::repositories::booking_repository::BookingWithDetails;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/:id/suspend", put(suspend_user))
        .route("/agencies", get(list_agencies))
        .route("/agencies/pending", get(list_pending_agencies))
        .route("/agencies/:id", get(get_agency))
        .route("/agencies/:id/verify", post(verify_agency))
        .route("/agencies/:id/reject", post(reject_agency))
        .route("/bookings", get(list_bookings))
        .route("/stats", get(platform_stats))
}

async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<ProfileResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_users().await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.get_user(id).await?;
    Ok(Json(response))
}

async fn suspend_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminUser(_admin): AdminUser,
    Json(request): Json<SuspendRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.set_suspended(id, request.suspended).await?;
    Ok(Json(response))
}

async fn list_agencies(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn list_pending_agencies(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.list_pending().await?;
    Ok(Json(response))
}

async fn get_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<AgencyResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn verify_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminUser(admin): AdminUser,
) -> Result<Json<ApiResponse<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.verify(admin, id).await?;
    Ok(Json(response))
}

async fn reject_agency(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AdminUser(admin): AdminUser,
    Json(request): Json<RejectAgencyRequest>,
) -> Result<Json<ApiResponse<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.reject(admin, id, request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<BookingWithDetails>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_bookings().await?;
    Ok(Json(response))
}

async fn platform_stats(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<PlatformStatsResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.platform_stats().await?;
    Ok(Json(response))
}
