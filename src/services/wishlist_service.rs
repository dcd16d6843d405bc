use async_trait::async_trait;
use crate::models::tour::Tour;

/// Contract between the wishlist endpoints and whatever backs them.
/// The "current user" endpoints resolve the caller's identity at the
/// HTTP layer and pass the user id in explicitly.
#[async_trait]
pub trait WishlistService: Send + Sync {
    /// Tours on a user's wishlist, oldest addition first.
    async fn get_user_wishlist(&self, user_id: i64) -> anyhow::Result<Vec<Tour>>;

    /// Idempotent, adding an already wishlisted tour is a no-op.
    async fn add_to_wishlist(&self, user_id: i64, tour_id: i64) -> anyhow::Result<()>;

    /// Removing an entry that does not exist is a no-op.
    async fn remove_from_wishlist(&self, user_id: i64, tour_id: i64) -> anyhow::Result<()>;

    /// How many users have wishlisted the tour.
    async fn get_wishlist_count_by_tour_id(&self, tour_id: i64) -> anyhow::Result<i64>;
}
