use serde::{Serialize, Deserialize};
use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::routing::{get, post, delete};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use crate::controller::AppState;
use crate::helpers::app_error::AppError;
use crate::helpers::current_user::CurrentUser;
use crate::models::tour::Tour;
use crate::repositories::postgres_repo::PostgresConnectionRepo;
use crate::services::wishlist_service::WishlistService;

pub fn router(app_state: AppState) -> Router {
    let wishlist_service: Arc<dyn WishlistService> = Arc::new(PostgresConnectionRepo::new(
        app_state.postgres_connection
    ));

    router_with_service(wishlist_service)
}

pub fn router_with_service(wishlist_service: Arc<dyn WishlistService>) -> Router {
    Router::new()
        .route("/user/:user_id", get(get_user_wishlist))
        .route("/my-wishlist", get(get_current_user_wishlist))
        .route("/add-current", post(add_to_wishlist_for_current))
        .route("/remove-current", delete(remove_from_wishlist_for_current))
        .route("/tour/:tour_id/count", get(get_wishlist_count_by_tour_id))
        .route_layer(Extension(wishlist_service))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TourIdQuery {
    #[serde(rename = "tourId")]
    pub tour_id: i64,
}

pub async fn get_user_wishlist(
    Extension(wishlist_service): Extension<Arc<dyn WishlistService>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Tour>>, AppError> {
    let wishlist = wishlist_service.get_user_wishlist(user_id).await?;
    Ok(Json(wishlist))
}

pub async fn get_current_user_wishlist(
    Extension(wishlist_service): Extension<Arc<dyn WishlistService>>,
    current_user: CurrentUser,
) -> Result<Json<Vec<Tour>>, AppError> {
    let wishlist = wishlist_service.get_user_wishlist(current_user.user_id).await?;
    Ok(Json(wishlist))
}

pub async fn add_to_wishlist_for_current(
    Extension(wishlist_service): Extension<Arc<dyn WishlistService>>,
    current_user: CurrentUser,
    Query(query): Query<TourIdQuery>,
) -> Result<StatusCode, AppError> {
    wishlist_service
        .add_to_wishlist(current_user.user_id, query.tour_id)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn remove_from_wishlist_for_current(
    Extension(wishlist_service): Extension<Arc<dyn WishlistService>>,
    current_user: CurrentUser,
    Query(query): Query<TourIdQuery>,
) -> Result<StatusCode, AppError> {
    wishlist_service
        .remove_from_wishlist(current_user.user_id, query.tour_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_wishlist_count_by_tour_id(
    Extension(wishlist_service): Extension<Arc<dyn WishlistService>>,
    Path(tour_id): Path<i64>,
) -> Result<Json<i64>, AppError> {
    let count = wishlist_service.get_wishlist_count_by_tour_id(tour_id).await?;
    Ok(Json(count))
}
