use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameQuery},
        user::{CreateUserDto, PublicUserDto, UserDto, UsernameQuery},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
        util::{extract::ValidJson, multipart::MultipartForm},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn user_service(state: &AppState) -> UserService<'_> {
    UserService::new(&state.db, state.cache.as_ref(), &state.files)
}

/// List users, or look one up by username.
///
/// Returns public projections only.
///
/// # Returns
/// - `200 OK` - The matching user, or every user
/// - `401 Unauthorized` - Not authenticated
/// - `404 Not Found` - No user with that username, or no users at all
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(("username" = Option<String>, Query, description = "Exact username to look up")),
    responses(
        (status = 200, description = "Users", body = ApiResponse<Vec<PublicUserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No user found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UsernameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = user_service(&state);

    if let Some(username) = query.username.filter(|u| !u.trim().is_empty()) {
        let Some(user) = service.get_by_username(username.trim()).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        return Ok((
            StatusCode::OK,
            Json(ApiResponse::new(
                "User retrieved successfully",
                vec![user.into_public_dto()],
            )),
        ));
    }

    let users = service.get_all().await?;
    if users.is_empty() {
        return Err(AppError::NotFound("No user found".to_string()));
    }

    let dtos: Vec<PublicUserDto> = users.into_iter().map(User::into_public_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Search users whose display name starts with `name`.
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    params(("name" = String, Query, description = "Display name prefix")),
    responses(
        (status = 200, description = "Matching users", body = ApiResponse<Vec<PublicUserDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let users = user_service(&state).search_by_name(&query.name).await?;
    let dtos: Vec<PublicUserDto> = users.into_iter().map(User::into_public_dto).collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Users retrieved successfully", dtos)),
    ))
}

/// Create a user, optionally an admin.
///
/// # Access Control
/// - `Admin` - Only admins can create users directly
///
/// # Returns
/// - `201 Created` - User created
/// - `400 Bad Request` - Invalid data, or username or email taken
/// - `401 Unauthorized` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let user = user_service(&state)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("User created successfully", user.into_dto())),
    ))
}

/// Get a user by ID, including private fields.
///
/// # Access Control
/// - The user themself or an admin
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = ApiResponse<UserDto>),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SelfOrAdmin(id)])?;

    match user_service(&state).get_by_id(id).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("User retrieved successfully", user.into_dto())),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Update a user's profile.
///
/// Accepts a multipart form with optional `username`, `name`, `email`, `password` and a
/// `picture_file` upload. The stored picture is replaced only when a new one is sent.
///
/// # Access Control
/// - The user themself or an admin
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid data, or username or email taken", body = ErrorDto),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SelfOrAdmin(id)])?;

    let form = MultipartForm::from_multipart(multipart, &[UpdateUserParams::PICTURE_FIELD]).await?;
    let params = UpdateUserParams::from_form(id, form)?;

    match user_service(&state).update(params).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("User updated successfully", user.into_dto())),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete a user, their content and every file they referenced.
///
/// # Access Control
/// - The user themself or an admin
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SelfOrAdmin(id)])?;

    if !user_service(&state).delete(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(ApiResponse::empty("User deleted successfully"))))
}

/// Emails of the users subscribed to a creator.
///
/// # Access Control
/// - The creator themself or an admin
#[utoipa::path(
    get,
    path = "/api/users/{creator_id}/subscribers/emails",
    tag = USER_TAG,
    params(("creator_id" = i32, Path, description = "Creator's user ID")),
    responses(
        (status = 200, description = "Subscriber emails", body = ApiResponse<Vec<String>>),
        (status = 401, description = "Not authenticated or not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_subscriber_emails(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(creator_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(creator_id)])?;

    let emails = user_service(&state)
        .subscriber_emails(creator_id, state.notifier.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::new("Ok", emails))))
}
