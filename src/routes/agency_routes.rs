use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::agency_controller::AgencyController;
use crate::dto::agency_dto::{AgencyResponse, SubmitAgencyRequest};
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_agency_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_agency))
        .route("/me", get(my_agency))
}

/// Alta inicial o reenvío tras un rechazo
async fn submit_agency(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SubmitAgencyRequest>,
) -> Result<Json<ApiResponse<AgencyResponse>>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.submit(user, request).await?;
    Ok(Json(response))
}

async fn my_agency(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AgencyResponse>, AppError> {
    let controller = AgencyController::new(state.pool.clone());
    let response = controller.my_agency(user.profile_id).await?;
    Ok(Json(response))
}
