//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI is
//! served at `/api/docs` and an HTML sitemap of the API is served at `/`.

use axum::{response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        self,
        sitemap::{render_sitemap, sitemap_paths, DOCS_PATH},
    },
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - HTML sitemap listing the API's `GET` endpoints
/// - `GET /user` - Static greeting
/// - `POST /register` - Register a user
/// - `POST /login` - Log in and receive an access token
/// - `GET|POST /personajes` - Add a character
/// - `GET|POST /planetas` - Add a planet
/// - `GET /favoritos` - Look up a favorite
///
/// Every route accepts cross-origin requests from any origin and is traced per request.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(&config, db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::CATALOG_TAG, description = "Character, planet & favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::character::create_character))
        .routes(routes!(controller::planet::create_planet))
        .routes(routes!(controller::favorite::find_favorite))
        .split_for_parts();

    let sitemap = render_sitemap(&sitemap_paths(&api));

    routes
        .route(
            "/",
            get(move || {
                let sitemap = sitemap.clone();
                async move { Html(sitemap) }
            }),
        )
        .merge(SwaggerUi::new(DOCS_PATH).url("/api/docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
