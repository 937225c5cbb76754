use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the axum router with every platform endpoint under `/api/v1`.
pub fn build_router(state: AppState) -> Router {
    let auth = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/refresh-token", post(handlers::auth::refresh_token))
        .route("/logout", post(handlers::auth::logout))
        .route("/change-password", patch(handlers::auth::change_password))
        .route("/current-user", get(handlers::auth::current_user))
        .route("/update-account", patch(handlers::auth::update_account))
        .route("/avatar", patch(handlers::auth::update_avatar));

    let blog = Router::new()
        .route(
            "/",
            get(handlers::blog::list_blogs).post(handlers::blog::create_blog),
        )
        .route("/single/:id", get(handlers::blog::single_blog))
        .route("/user-blog/:id", get(handlers::blog::user_blogs))
        .route("/own-blog", get(handlers::blog::own_blogs))
        .route(
            "/:id",
            patch(handlers::blog::update_blog).delete(handlers::blog::delete_blog),
        );

    let category = Router::new()
        .route(
            "/",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/:id",
            get(handlers::category::get_category)
                .patch(handlers::category::update_category)
                .delete(handlers::category::delete_category),
        );

    // GET and POST take a blog id; PATCH and DELETE take a comment id.
    let comment = Router::new().route(
        "/:id",
        get(handlers::comment::list_comments)
            .post(handlers::comment::add_comment)
            .patch(handlers::comment::update_comment)
            .delete(handlers::comment::delete_comment),
    );

    let like = Router::new()
        .route("/blog/:id", get(handlers::like::toggle_blog_like))
        .route("/comment/:id", get(handlers::like::toggle_comment_like));

    let api = Router::new()
        .nest("/auth", auth)
        .nest("/blog", blog)
        .nest("/category", category)
        .nest("/comment", comment)
        .nest("/like", like)
        .route("/health", get(handlers::health));

    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Credentialed CORS: an exact configured origin, or mirror the request
/// origin when none is configured (wildcard is invalid with credentials).
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match config
        .cors_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
    {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::mirror_request(),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
