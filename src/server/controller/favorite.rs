//! Favorite lookup endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::{
    model::{api::MessageDto, catalog::FavoriteQueryDto},
    server::{
        controller::CATALOG_TAG, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// Look up a user's favorite
///
/// The lookup has no response contract: it answers 204 whether or not the favorite
/// exists, and skips the lookup when any field is absent.
///
/// # Responses
/// - 204 (No Content): Lookup performed
/// - 400 (Bad Request): Body is not JSON
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    get,
    path = "/favoritos",
    tag = CATALOG_TAG,
    request_body = FavoriteQueryDto,
    responses(
        (status = 204, description = "Lookup performed"),
        (status = 400, description = "Malformed body", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn find_favorite(
    State(state): State<AppState>,
    payload: Result<Json<FavoriteQueryDto>, JsonRejection>,
) -> Result<StatusCode, Error> {
    let Json(query) = payload?;

    if let (Some(user_id), Some(kind), Some(favorite_id)) =
        (query.user_id, query.kind.as_deref(), query.favorite_id)
    {
        let favorite = FavoriteService::new(&state.db)
            .find(user_id, kind, favorite_id)
            .await?;

        tracing::debug!(
            user_id = %user_id,
            kind = %kind,
            favorite_id = %favorite_id,
            found = favorite.is_some(),
            "Looked up favorite"
        );
    }

    Ok(StatusCode::NO_CONTENT)
}
