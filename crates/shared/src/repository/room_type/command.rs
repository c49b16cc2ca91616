use crate::{
    abstract_trait::room_type::repository::RoomTypeCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateRoomTypeRequest, UpdateRoomTypeRequest},
    errors::RepositoryError,
    model::room_type::RoomTypeModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct RoomTypeCommandRepository {
    db: ConnectionPool,
}

impl RoomTypeCommandRepository {
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
impl RoomTypeCommandRepositoryTrait for RoomTypeCommandRepository {
    async fn create(
        &self,
        request: &CreateRoomTypeRequest,
    ) -> Result<RoomTypeModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            INSERT INTO room_types (id_roomtype, room_type, price, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING id_roomtype, room_type, price, created_at, updated_at, deleted
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.room_type)
        .bind(request.price)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create room type '{}': {err:?}",
                request.room_type
            );
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRoomTypeRequest,
    ) -> Result<RoomTypeModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            UPDATE room_types
            SET room_type = $2, price = $3, updated_at = current_timestamp
            WHERE id_roomtype = $1 AND deleted = false
            RETURNING id_roomtype, room_type, price, created_at, updated_at, deleted
            "#,
        )
        .bind(id)
        .bind(&request.room_type)
        .bind(request.price)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update room type {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        result.ok_or(RepositoryError::NotFound)
    }

    async fn trash(&self, id: Uuid) -> Result<RoomTypeModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomTypeModel>(
            r#"
            UPDATE room_types
            SET deleted = true, updated_at = current_timestamp
            WHERE id_roomtype = $1 AND deleted = false
            RETURNING id_roomtype, room_type, price, created_at, updated_at, deleted
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to trash room type {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        result.ok_or(RepositoryError::NotFound)
    }
}
