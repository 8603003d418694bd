use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameQuery},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::genre::{CreateGenreParams, Genre, UpdateGenreParams},
        service::genre::GenreService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

/// Create a genre.
///
/// # Access Control
/// - `Admin` - Only admins can create genres
///
/// # Returns
/// - `201 Created` - Genre created
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/genres",
    tag = GENRE_TAG,
    request_body = CreateGenreDto,
    responses(
        (status = 201, description = "Genre created", body = ApiResponse<GenreDto>),
        (status = 400, description = "Invalid genre data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    let genre = service.create(CreateGenreParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Genre created successfully", genre.into_dto())),
    ))
}

/// List all genres.
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "All genres", body = ApiResponse<Vec<GenreDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_genres(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    let genres = service.get_all().await?;
    let dtos: Vec<GenreDto> = genres.into_iter().map(Genre::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Search genres by name substring.
#[utoipa::path(
    get,
    path = "/api/genres/search",
    tag = GENRE_TAG,
    params(("name" = String, Query, description = "Substring of the name")),
    responses(
        (status = 200, description = "Matching genres", body = ApiResponse<Vec<GenreDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn search_genres(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    let genres = service.search(&query.name).await?;
    let dtos: Vec<GenreDto> = genres.into_iter().map(Genre::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Get a genre by ID.
#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre", body = ApiResponse<GenreDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_genre_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    match service.get_by_id(id).await? {
        Some(genre) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Genre retrieved successfully", genre.into_dto())),
        )),
        None => Err(AppError::NotFound("Genre not found".to_string())),
    }
}

/// Update a genre.
///
/// # Access Control
/// - `Admin` - Only admins can update genres
///
/// # Returns
/// - `200 OK` - Genre updated
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `404 Not Found` - No genre with that ID
#[utoipa::path(
    put,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenreDto,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreDto>),
        (status = 400, description = "Invalid genre data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    match service.update(UpdateGenreParams::from_dto(id, payload)).await? {
        Some(genre) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Genre updated successfully", genre.into_dto())),
        )),
        None => Err(AppError::NotFound("Genre not found".to_string())),
    }
}

/// Delete a genre and unlink it from content.
///
/// # Access Control
/// - `Admin` - Only admins can delete genres
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = GenreService::new(&state.db, state.cache.as_ref());

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Genre not found".to_string()));
    }

    Ok((StatusCode::OK, Json(ApiResponse::empty("Genre deleted successfully"))))
}
