use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::jd_dto::{
        AgingRefreshResponse, JdStatsResponse, JobDescriptionListResponse,
        JobDescriptionPayload, JobDescriptionResponse, ScanTextPayload,
    },
    error::Result,
    utils::validation::validate_payload,
    AppState,
};

#[utoipa::path(
    post,
    path = "/records",
    request_body = JobDescriptionPayload,
    responses(
        (status = 201, description = "Job description created", body = Json<JobDescriptionResponse>),
        (status = 400, description = "Validation failed")
    )
)]
#[axum::debug_handler]
pub async fn create_record(
    State(state): State<AppState>,
    Json(payload): Json<JobDescriptionPayload>,
) -> Result<impl IntoResponse> {
    validate_payload(&payload)?;
    let record = state.jd_service.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(JobDescriptionResponse::from(record)),
    ))
}

#[utoipa::path(
    get,
    path = "/records",
    responses(
        (status = 200, description = "All job descriptions in creation order", body = Json<JobDescriptionListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_records(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.jd_service.list();
    Ok(Json(JobDescriptionListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Job description ID")
    ),
    responses(
        (status = 200, description = "Job description found", body = Json<JobDescriptionResponse>),
        (status = 404, description = "Job description not found")
    )
)]
#[axum::debug_handler]
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let record = state.jd_service.get(id)?;
    Ok(Json(JobDescriptionResponse::from(record)))
}

#[utoipa::path(
    put,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Job description ID")
    ),
    request_body = JobDescriptionPayload,
    responses(
        (status = 200, description = "Job description updated", body = Json<JobDescriptionResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Job description not found")
    )
)]
#[axum::debug_handler]
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobDescriptionPayload>,
) -> Result<impl IntoResponse> {
    validate_payload(&payload)?;
    let record = state.jd_service.update(id, payload)?;
    Ok(Json(JobDescriptionResponse::from(record)))
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    params(
        ("id" = i64, Path, description = "Job description ID")
    ),
    responses(
        (status = 204, description = "Job description deleted"),
        (status = 404, description = "Job description not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    state.jd_service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/records/aging-refresh",
    responses(
        (status = 200, description = "Aging recomputed for every record", body = Json<AgingRefreshResponse>)
    )
)]
#[axum::debug_handler]
pub async fn refresh_aging(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let updated_count = state.jd_service.update_aging();
    Ok(Json(AgingRefreshResponse { updated_count }))
}

#[utoipa::path(
    get,
    path = "/records/stats",
    responses(
        (status = 200, description = "Aggregate report numbers", body = Json<JdStatsResponse>)
    )
)]
#[axum::debug_handler]
pub async fn record_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(JdStatsResponse::from(state.jd_service.stats())))
}

#[utoipa::path(
    post,
    path = "/records/scan",
    request_body = ScanTextPayload,
    responses(
        (status = 200, description = "Extraction suggestions from the scanning service"),
        (status = 502, description = "Scanning service failed"),
        (status = 503, description = "Scanning service not configured")
    )
)]
#[axum::debug_handler]
pub async fn scan_record_text(
    State(state): State<AppState>,
    Json(payload): Json<ScanTextPayload>,
) -> Result<impl IntoResponse> {
    payload.validate().map_err(|e| {
        crate::error::Error::Validation(crate::utils::validation::flatten_errors(&e))
    })?;
    let extraction = state.scan_service.scan(&payload.jd_text).await?;
    Ok(Json(extraction))
}
