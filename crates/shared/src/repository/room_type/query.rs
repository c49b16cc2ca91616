use crate::{
    abstract_trait::room_type::repository::RoomTypeQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::room_type::RoomTypeModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

#[derive(Clone)]
pub struct RoomTypeQueryRepository {
    db: ConnectionPool,
}

impl RoomTypeQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl RoomTypeQueryRepositoryTrait for RoomTypeQueryRepository {
    async fn find_all(&self) -> Result<Vec<RoomTypeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            SELECT id_roomtype, room_type, price, created_at, updated_at, deleted
            FROM room_types
            WHERE deleted = false
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch room types: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            SELECT id_roomtype, room_type, price, created_at, updated_at, deleted
            FROM room_types
            WHERE id_roomtype = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Error fetching room type by id {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn find_by_id_any(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            SELECT id_roomtype, room_type, price, created_at, updated_at, deleted
            FROM room_types
            WHERE id_roomtype = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Error fetching room type by id {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result)
    }

    async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM room_types
            WHERE id_roomtype = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Error counting room type {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(count)
    }
}
