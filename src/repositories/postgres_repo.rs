use anyhow::{anyhow, Context};
use async_trait::async_trait;
use bb8_postgres::bb8::{Pool, PooledConnection};
use bb8_postgres::tokio_postgres::{NoTls, Row};
use bb8_postgres::PostgresConnectionManager;
use time::OffsetDateTime;
use tracing::warn;
use crate::models::tour::Tour;
use crate::services::wishlist_service::WishlistService;

pub const RETRY_LIMIT: usize = 5;

pub struct PostgresConnectionRepo {
    postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
}

impl PostgresConnectionRepo {
    pub fn new(
        postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
    ) -> Self {
        Self {
            postgres_connection
        }
    }

    async fn get_postgres_connection(
        &self,
    ) -> anyhow::Result<PooledConnection<PostgresConnectionManager<NoTls>>> {
        for _ in 0..RETRY_LIMIT {
            match self.postgres_connection.get().await {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    warn!("Failed to retrieve postgres connection due to: {}, retrying in 3s", e);
                    tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                    continue;
                }
            }
        }

        return Err(anyhow!("Failed to retrieve a valid connection from postgres pool, BAILING"));
    }
}

#[async_trait]
impl WishlistService for PostgresConnectionRepo {
    async fn get_user_wishlist(&self, user_id: i64) -> anyhow::Result<Vec<Tour>> {
        let conn = self.get_postgres_connection().await?;
        let stmt = format!(
            "SELECT t.* FROM tours t \
            JOIN user_wishlist w ON w.tour_id = t.id \
            where w.user_id = {} \
            ORDER BY w.added_at;",
            user_id,
        );

        let rows = conn
            .query(&stmt, &[])
            .await
            .with_context(|| format!("Failed to retrieve wishlist for user: {}", user_id))?;

        let mut wishlisted_tours: Vec<Tour> = Vec::new();
        for row in rows {
            let tour = parse_row_into_tour(row);

            wishlisted_tours.push(tour);
        }

        Ok(wishlisted_tours)
    }

    async fn add_to_wishlist(&self, user_id: i64, tour_id: i64) -> anyhow::Result<()> {
        let conn = self.get_postgres_connection().await?;
        let mut stmt = String::from("INSERT INTO user_wishlist (user_id, tour_id, added_at) VALUES ");
        let params = format!(
            "({}, {}, '{}')",
            user_id,
            tour_id,
            OffsetDateTime::now_utc()
        );
        stmt.push_str(&params);
        stmt.push_str(" ON CONFLICT DO NOTHING;");

        conn.execute(&stmt, &[])
            .await
            .with_context(|| format!("Failed to add tour: {} to wishlist for user: {}", tour_id, user_id))?;

        Ok(())
    }

    async fn remove_from_wishlist(&self, user_id: i64, tour_id: i64) -> anyhow::Result<()> {
        let conn = self.get_postgres_connection().await?;
        let stmt = format!(
            "DELETE FROM user_wishlist where user_id = {} and tour_id = {};",
            user_id,
            tour_id
        );

        conn.execute(&stmt, &[])
            .await
            .with_context(|| format!("Failed to remove tour: {} from wishlist for user: {}", tour_id, user_id))?;

        Ok(())
    }

    async fn get_wishlist_count_by_tour_id(&self, tour_id: i64) -> anyhow::Result<i64> {
        let conn = self.get_postgres_connection().await?;
        let stmt = format!(
            "SELECT COUNT(*) as count FROM user_wishlist where tour_id = {};",
            tour_id
        );

        let row = conn
            .query_one(&stmt, &[])
            .await
            .with_context(|| format!("Failed to count wishlist entries for tour: {}", tour_id))?;

        Ok(row.get::<&str, i64>("count"))
    }
}

fn parse_row_into_tour(
    row: Row
) -> Tour {
    Tour {
        id: row.get("id"),
        title: row.get("title"),
        destination: row.get("destination"),
        description: row.get("description"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
        price: row.get::<&str, f64>("price"),
        rating: row.get::<&str, f64>("rating"),
        duration: row.get::<&str, i32>("duration"),
        max_group_size: row.get::<&str, i32>("max_group_size"),
        review_count: row.get::<&str, i32>("review_count"),
    }
}
