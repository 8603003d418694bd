use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, NameQuery},
        category::{CreateCategoryDto, CategoryDto, UpdateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::category::{CreateCategoryParams, Category, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// Create a category.
///
/// # Access Control
/// - `Admin` - Only admins can create categories
///
/// # Returns
/// - `201 Created` - Category created
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - Not authenticated or not an admin
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    let category = service.create(CreateCategoryParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Category created successfully", category.into_dto())),
    ))
}

/// List all categories.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories", body = ApiResponse<Vec<CategoryDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    let categories = service.get_all().await?;
    let dtos: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Search categories by name substring.
#[utoipa::path(
    get,
    path = "/api/categories/search",
    tag = CATEGORY_TAG,
    params(("name" = String, Query, description = "Substring of the name")),
    responses(
        (status = 200, description = "Matching categories", body = ApiResponse<Vec<CategoryDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn search_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    let categories = service.search(&query.name).await?;
    let dtos: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new("Success", dtos))))
}

/// Get a category by ID.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = ApiResponse<CategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_category_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    match service.get_by_id(id).await? {
        Some(category) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Category retrieved successfully", category.into_dto())),
        )),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Update a category.
///
/// # Access Control
/// - `Admin` - Only admins can update categories
///
/// # Returns
/// - `200 OK` - Category updated
/// - `400 Bad Request` - Empty or duplicate name
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `404 Not Found` - No category with that ID
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryDto>),
        (status = 400, description = "Invalid category data", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    match service.update(UpdateCategoryParams::from_dto(id, payload)).await? {
        Some(category) => Ok((
            StatusCode::OK,
            Json(ApiResponse::new("Category updated successfully", category.into_dto())),
        )),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category and unlink it from content.
///
/// # Access Control
/// - `Admin` - Only admins can delete categories
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = CategoryService::new(&state.db, state.cache.as_ref());

    if !service.delete(id).await? {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    Ok((StatusCode::OK, Json(ApiResponse::empty("Category deleted successfully"))))
}
