use crate::{
    abstract_trait::room::repository::RoomCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateRoomRequest, UpdateRoomRequest},
    errors::RepositoryError,
    model::room::RoomModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct RoomCommandRepository {
    db: ConnectionPool,
}

impl RoomCommandRepository {
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
impl RoomCommandRepositoryTrait for RoomCommandRepository {
    async fn create(&self, request: &CreateRoomRequest) -> Result<RoomModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomModel>(
            r#"
            INSERT INTO rooms (id_room, id_roomtype, status, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING id_room, id_roomtype, status, created_at, updated_at, deleted
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.id_roomtype)
        .bind(&request.status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create room for room type {}: {err:?}",
                request.id_roomtype
            );
            RepositoryError::from(err)
        })?;

        Ok(result)
    }

    async fn update(
        &self,
        id: Uuid,
        request: &UpdateRoomRequest,
    ) -> Result<RoomModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomModel>(
            r#"
            UPDATE rooms
            SET id_roomtype = $2, status = $3, updated_at = current_timestamp
            WHERE id_room = $1 AND deleted = false
            RETURNING id_room, id_roomtype, status, created_at, updated_at, deleted
            "#,
        )
        .bind(id)
        .bind(request.id_roomtype)
        .bind(&request.status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update room {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        result.ok_or(RepositoryError::NotFound)
    }

    async fn trash(&self, id: Uuid) -> Result<RoomModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query_as::<_, RoomModel>(
            r#"
            UPDATE rooms
            SET deleted = true, updated_at = current_timestamp
            WHERE id_room = $1 AND deleted = false
            RETURNING id_room, id_roomtype, status, created_at, updated_at, deleted
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to trash room {id}: {err:?}");
            RepositoryError::from(err)
        })?;

        result.ok_or(RepositoryError::NotFound)
    }
}
