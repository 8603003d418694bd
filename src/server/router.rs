//! Route table and OpenAPI document.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{auth, category, content, genre, sponsor, user},
    state::AppState,
};

/// Largest accepted multipart body, for content and profile picture uploads.
const UPLOAD_BODY_LIMIT: usize = 512 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "bondflix",
        description = "Content platform API: users, content, genres, categories and sponsors"
    ),
    paths(
        auth::login,
        auth::signup,
        auth::logout,
        auth::auto_login,
        user::get_users,
        user::search_users,
        user::create_user,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        user::get_subscriber_emails,
        content::create_content,
        content::get_all_content,
        content::get_content_by_id,
        content::search_content,
        content::get_content_by_creator,
        content::update_content,
        content::delete_content,
        genre::create_genre,
        genre::get_all_genres,
        genre::search_genres,
        genre::get_genre_by_id,
        genre::update_genre,
        genre::delete_genre,
        category::create_category,
        category::get_all_categories,
        category::search_categories,
        category::get_category_by_id,
        category::update_category,
        category::delete_category,
        sponsor::create_sponsor,
        sponsor::get_all_sponsors,
        sponsor::search_sponsors,
        sponsor::get_sponsor_by_id,
        sponsor::update_sponsor,
        sponsor::delete_sponsor,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Login, registration and session re-authentication"),
        (name = "user", description = "User accounts and profiles"),
        (name = "content", description = "Content items and their associations"),
        (name = "genre", description = "Genres"),
        (name = "category", description = "Categories"),
        (name = "sponsor", description = "Sponsors"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/auto-login", get(auth::auto_login))
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route("/api/users/search", get(user::search_users))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{creator_id}/subscribers/emails",
            get(user::get_subscriber_emails),
        )
        .route(
            "/api/content",
            get(content::get_all_content).post(content::create_content),
        )
        .route("/api/content/search", get(content::search_content))
        .route(
            "/api/content/creator/{creator_id}",
            get(content::get_content_by_creator),
        )
        .route(
            "/api/content/{id}",
            get(content::get_content_by_id)
                .put(content::update_content)
                .delete(content::delete_content),
        )
        .route(
            "/api/genres",
            get(genre::get_all_genres).post(genre::create_genre),
        )
        .route("/api/genres/search", get(genre::search_genres))
        .route(
            "/api/genres/{id}",
            get(genre::get_genre_by_id)
                .put(genre::update_genre)
                .delete(genre::delete_genre),
        )
        .route(
            "/api/categories",
            get(category::get_all_categories).post(category::create_category),
        )
        .route("/api/categories/search", get(category::search_categories))
        .route(
            "/api/categories/{id}",
            get(category::get_category_by_id)
                .put(category::update_category)
                .delete(category::delete_category),
        )
        .route(
            "/api/sponsors",
            get(sponsor::get_all_sponsors).post(sponsor::create_sponsor),
        )
        .route("/api/sponsors/search", get(sponsor::search_sponsors))
        .route(
            "/api/sponsors/{id}",
            get(sponsor::get_sponsor_by_id)
                .put(sponsor::update_sponsor)
                .delete(sponsor::delete_sponsor),
        )
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
