use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{IdentityDto, LoginDto, RegisterDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::session::AuthSession,
        model::user::CreateUserParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
        util::extract::ValidJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with a username or email and password.
///
/// The issued token is returned and also kept in the session for re-authentication.
///
/// # Returns
/// - `200 OK` - Token and the identity it carries
/// - `400 Bad Request` - Missing identifier or password
/// - `404 Not Found` - Unknown identifier or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<TokenDto>),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 404, description = "Authentication failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ValidJson(payload): ValidJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (token, identity) = service.login(&payload.identifier, &payload.password).await?;

    AuthSession::new(&session).begin(token.clone()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            "Login successful",
            TokenDto {
                token,
                identity: identity.into_dto(),
            },
        )),
    ))
}

/// Register a new, non-admin user.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Registration successful"),
        (status = 400, description = "Invalid data, or username or email taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.cache.as_ref(), &state.files);

    service
        .create(CreateUserParams::from_register_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::empty("Registration successful"))))
}

/// Clear the caller's session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logout successful"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(ApiResponse::empty("Logout successful"))))
}

/// Re-authenticate with the token kept in the session.
///
/// # Returns
/// - `200 OK` - Session token still valid
/// - `401 Unauthorized` - Stored token expired or no longer verifies
/// - `404 Not Found` - Session holds no token
#[utoipa::path(
    get,
    path = "/api/auth/auto-login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<IdentityDto>),
        (status = 401, description = "Session token rejected", body = ErrorDto),
        (status = 404, description = "No token", body = ErrorDto)
    ),
)]
pub async fn auto_login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);
    let service = AuthService::new(&state.db, &state.tokens);

    let identity = service.reauthenticate(auth_session.get_token().await?)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new("Login successful", identity.into_dto())),
    ))
}
