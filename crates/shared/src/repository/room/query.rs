use crate::{
    abstract_trait::room::repository::RoomQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::room::RoomWithTypeModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

// The join intentionally does not filter on room_types.deleted: a room that
// references a soft-deleted room type still resolves.
const SELECT_ROOM_WITH_TYPE: &str = r#"
    SELECT r.id_room, r.id_roomtype, r.status, r.created_at, r.updated_at, r.deleted,
           t.price AS room_type_price,
           t.created_at AS room_type_created_at,
           t.updated_at AS room_type_updated_at
    FROM rooms r
    JOIN room_types t ON t.id_roomtype = r.id_roomtype
"#;

#[derive(Clone)]
pub struct RoomQueryRepository {
    db: ConnectionPool,
}

impl RoomQueryRepository {
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
impl RoomQueryRepositoryTrait for RoomQueryRepository {
    async fn find_all(&self) -> Result<Vec<RoomWithTypeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{SELECT_ROOM_WITH_TYPE} WHERE r.deleted = false ORDER BY r.created_at ASC");

        let rows = sqlx::query_as::<_, RoomWithTypeModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch rooms: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomWithTypeModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("{SELECT_ROOM_WITH_TYPE} WHERE r.id_room = $1 AND r.deleted = false");

        let result = sqlx::query_as::<_, RoomWithTypeModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Error fetching room by id {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result)
    }

    async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM rooms
            WHERE id_room = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Error counting room {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(count)
    }
}
