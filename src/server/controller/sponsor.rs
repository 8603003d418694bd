use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameQuery},
        sponsor::{CreateSponsorDto, SponsorDto, UpdateSponsorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::sponsor::{CreateSponsorParams, Sponsor, UpdateSponsorParams},
        service::sponsor::SponsorService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping sponsor endpoints in OpenAPI documentation
pub static SPONSOR_TAG: &str = "sponsor";

/// Create a sponsor.
///
/// # Access Control
/// - `Admin` - Only admins can create sponsors
///
/// # Returns
/// - `201 Created` - Sponsor created
/// - `400 Bad Request` - Empty name or link, or a sponsor with that name exists
/// - `401 Unauthorized` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/sponsors",
    tag = SPONSOR_TAG,
    request_body = CreateSponsorDto,
    responses(
        (status = 201, description = "Sponsor created", body = ApiResponse<SponsorDto>),
        (status = 400, description = "Invalid sponsor data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_sponsor(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateSponsorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    let sponsor = service.create(CreateSponsorParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Sponsor created successfully", sponsor.into_dto())),
    ))
}

/// List all sponsors.
#[utoipa::path(
    get,
    path = "/api/sponsors",
    tag = SPONSOR_TAG,
    responses(
        (status = 200, description = "All sponsors", body = ApiResponse<Vec<SponsorDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_sponsors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    let sponsors = service.get_all().await?;
    let dtos: Vec<SponsorDto> = sponsors.into_iter().map(Sponsor::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Search sponsors by name substring.
#[utoipa::path(
    get,
    path = "/api/sponsors/search",
    tag = SPONSOR_TAG,
    params(("name" = String, Query, description = "Substring of the name")),
    responses(
        (status = 200, description = "Matching sponsors", body = ApiResponse<Vec<SponsorDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn search_sponsors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    let sponsors = service.search(&query.name).await?;
    let dtos: Vec<SponsorDto> = sponsors.into_iter().map(Sponsor::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Get a sponsor by ID.
#[utoipa::path(
    get,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor ID")),
    responses(
        (status = 200, description = "Sponsor", body = ApiResponse<SponsorDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_sponsor_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    match service.get_by_id(id).await? {
        Some(sponsor) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Sponsor retrieved successfully", sponsor.into_dto())),
        )),
        None => Err(AppError::NotFound("Sponsor not found".to_string())),
    }
}

/// Update a sponsor.
///
/// # Access Control
/// - `Admin` - Only admins can update sponsors
///
/// # Returns
/// - `200 OK` - Sponsor updated
/// - `400 Bad Request` - Empty name or link
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `404 Not Found` - No sponsor with that ID
#[utoipa::path(
    put,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor ID")),
    request_body = UpdateSponsorDto,
    responses(
        (status = 200, description = "Sponsor updated", body = ApiResponse<SponsorDto>),
        (status = 400, description = "Invalid sponsor data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_sponsor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateSponsorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    match service.update(UpdateSponsorParams::from_dto(id, payload)).await? {
        Some(sponsor) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Sponsor updated successfully", sponsor.into_dto())),
        )),
        None => Err(AppError::NotFound("Sponsor not found".to_string())),
    }
}

/// Delete a sponsor and unlink it from content.
///
/// # Access Control
/// - `Admin` - Only admins can delete sponsors
#[utoipa::path(
    delete,
    path = "/api/sponsors/{id}",
    tag = SPONSOR_TAG,
    params(("id" = i32, Path, description = "Sponsor ID")),
    responses(
        (status = 200, description = "Sponsor deleted"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Sponsor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_sponsor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = SponsorService::new(&state.db, state.cache.as_ref());

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Sponsor not found".to_string()));
    }

    Ok((StatusCode::OK, Json(ApiResponse::empty("Sponsor deleted successfully"))))
}
