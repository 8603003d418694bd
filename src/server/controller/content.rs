use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        content::{ContentDto, TitleQuery},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::content::{Content, ContentUploads, CreateContentParams, UpdateContentParams},
        service::{access::ContentAccess, content::ContentService},
        state::AppState,
        util::multipart::MultipartForm,
    },
};

/// Tag for grouping content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

fn content_service(state: &AppState) -> ContentService<'_> {
    ContentService::new(
        &state.db,
        state.cache.as_ref(),
        &state.files,
        state.notifier.as_ref(),
    )
}

fn into_dtos(content: Vec<Content>) -> Vec<ContentDto> {
    content.into_iter().map(Content::into_dto).collect()
}

/// Create a content item.
///
/// Accepts a multipart form with `title`, `description`, optional `creator_id`,
/// `visibility`, `genre_ids`, `category_ids`, `sponsor_ids` and the files `content_file`
/// and `thumbnail_file`. Subscribers of the creator are notified after the content is
/// stored.
///
/// # Access Control
/// - Authenticated; creating for another creator requires admin
///
/// # Returns
/// - `201 Created` - Content stored
/// - `400 Bad Request` - Missing title or description, or malformed field
/// - `401 Unauthorized` - Not authenticated, or not allowed to publish for that creator
/// - `404 Not Found` - Creator does not exist
/// - `500 Internal Server Error` - Database, storage, or association error
#[utoipa::path(
    post,
    path = "/api/content",
    tag = CONTENT_TAG,
    responses(
        (status = 201, description = "Content created", body = ApiResponse<ContentDto>),
        (status = 400, description = "Invalid form", body = ErrorDto),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let form = MultipartForm::from_multipart(multipart, &ContentUploads::FIELDS).await?;
    let params = CreateContentParams::from_form(&identity, form)?;

    if !identity.owns_or_admin(params.creator_id) {
        return Err(AuthError::AccessDenied(
            identity.user_id,
            format!("Attempted to publish content for creator {}", params.creator_id),
        )
        .into());
    }

    let content = content_service(&state).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Content created successfully", content.into_dto())),
    ))
}

/// List all content.
///
/// Served from the cached collection snapshot while it is live.
///
/// # Returns
/// - `200 OK` - All content items
/// - `500 Internal Server Error` - Database or cache error
#[utoipa::path(
    get,
    path = "/api/content",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "All content", body = ApiResponse<Vec<ContentDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_content(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let content = content_service(&state).get_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", into_dtos(content)))))
}

/// Get a content item by ID.
///
/// # Access Control
/// - Creator, admin, or a subscriber of the creator
///
/// # Returns
/// - `200 OK` - The content item
/// - `401 Unauthorized` - Not authenticated, or not subscribed to the creator
/// - `404 Not Found` - No content with that ID
#[utoipa::path(
    get,
    path = "/api/content/{id}",
    tag = CONTENT_TAG,
    params(("id" = i32, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content item", body = ApiResponse<ContentDto>),
        (status = 401, description = "Not authenticated or subscription required", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_content_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let Some(content) = content_service(&state).get_by_id(id).await? else {
        return Err(AppError::NotFound("Content not found".to_string()));
    };

    let access = ContentAccess::new(state.subscriptions.as_ref());
    if !access.can_read(&identity, &content).await {
        return Err(AuthError::SubscriptionRequired(identity.user_id, content.creator_id).into());
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Content retrieved successfully", content.into_dto())),
    ))
}

/// Search content by title substring.
#[utoipa::path(
    get,
    path = "/api/content/search",
    tag = CONTENT_TAG,
    params(("title" = String, Query, description = "Substring of the title")),
    responses(
        (status = 200, description = "Matching content", body = ApiResponse<Vec<ContentDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn search_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TitleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let content = content_service(&state).search_by_title(&query.title).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", into_dtos(content)))))
}

/// List a creator's content, newest first.
///
/// # Access Control
/// - The creator, an admin, or a subscriber of the creator
///
/// # Returns
/// - `200 OK` - The creator's content
/// - `401 Unauthorized` - Not authenticated, or not subscribed to the creator
#[utoipa::path(
    get,
    path = "/api/content/creator/{creator_id}",
    tag = CONTENT_TAG,
    params(("creator_id" = i32, Path, description = "Creator's user ID")),
    responses(
        (status = 200, description = "Creator's content", body = ApiResponse<Vec<ContentDto>>),
        (status = 401, description = "Not authenticated or subscription required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_content_by_creator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(creator_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let access = ContentAccess::new(state.subscriptions.as_ref());
    if !access.can_view_creator(&identity, creator_id).await {
        return Err(AuthError::SubscriptionRequired(identity.user_id, creator_id).into());
    }

    let content = content_service(&state).get_by_creator(creator_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", into_dtos(content)))))
}

/// Update a content item.
///
/// Accepts the same multipart fields as create, all optional. File paths change only
/// when a new file is uploaded; association ids are added to the existing sets.
///
/// # Access Control
/// - Creator or admin
///
/// # Returns
/// - `200 OK` - Updated content
/// - `400 Bad Request` - Malformed field
/// - `401 Unauthorized` - Not authenticated, or neither creator nor admin
/// - `404 Not Found` - No content with that ID
#[utoipa::path(
    put,
    path = "/api/content/{id}",
    tag = CONTENT_TAG,
    params(("id" = i32, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content updated", body = ApiResponse<ContentDto>),
        (status = 400, description = "Invalid form", body = ErrorDto),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let service = content_service(&state);

    let Some(existing) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("Content not found".to_string()));
    };

    if !ContentAccess::can_write(&identity, &existing) {
        return Err(AuthError::AccessDenied(
            identity.user_id,
            format!("Attempted to update content {} of creator {}", id, existing.creator_id),
        )
        .into());
    }

    let form = MultipartForm::from_multipart(multipart, &ContentUploads::FIELDS).await?;
    let params = UpdateContentParams::from_form(id, form)?;

    let content = service.update(&existing, params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Content updated successfully", content.into_dto())),
    ))
}

/// Delete a content item and its files.
///
/// # Access Control
/// - Creator or admin
///
/// # Returns
/// - `200 OK` - Content deleted
/// - `401 Unauthorized` - Not authenticated, or neither creator nor admin
/// - `404 Not Found` - No content with that ID
#[utoipa::path(
    delete,
    path = "/api/content/{id}",
    tag = CONTENT_TAG,
    params(("id" = i32, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content deleted"),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "Content not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_content(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let identity = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let service = content_service(&state);

    let Some(existing) = service.get_by_id(id).await? else {
        return Err(AppError::NotFound("Content not found".to_string()));
    };

    if !ContentAccess::can_write(&identity, &existing) {
        return Err(AuthError::AccessDenied(
            identity.user_id,
            format!("Attempted to delete content {} of creator {}", id, existing.creator_id),
        )
        .into());
    }

    if !service.delete(&existing).await? {
        return Err(AppError::NotFound("Content not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::empty("Content deleted successfully")),
    ))
}
