use crate::{
    abstract_trait::room::{repository::DynRoomQueryRepository, service::RoomQueryServiceTrait},
    domain::responses::{ApiResponse, RoomDetailResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct RoomQueryService {
    query: DynRoomQueryRepository,
}

impl RoomQueryService {
    pub fn new(query: DynRoomQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl RoomQueryServiceTrait for RoomQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<RoomDetailResponse>>, ServiceError> {
        info!("📋 Fetching all rooms");

        let rooms = self.query.find_all().await.map_err(|e| {
            error!("💥 Failed to fetch rooms: {e:?}");
            ServiceError::from(e)
        })?;

        let data = rooms.into_iter().map(RoomDetailResponse::from).collect();

        Ok(ApiResponse {
            status: "success".into(),
            message: "Rooms fetched successfully".into(),
            data,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RoomDetailResponse>, ServiceError> {
        info!("🔍 Fetching room id={id}");

        let room = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("💥 Failed to fetch room id={id}: {e:?}");
                ServiceError::from(e)
            })?
            .ok_or_else(|| ServiceError::NotFound("Room not found".into()))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room fetched successfully".into(),
            data: RoomDetailResponse::from(room),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::{MockRoomQueryRepo, sample_room_with_type};
    use std::sync::Arc;

    #[tokio::test]
    async fn find_all_nests_trimmed_room_type() {
        let id_room = Uuid::new_v4();
        let id_roomtype = Uuid::new_v4();

        let mut repo = MockRoomQueryRepo::new();
        repo.expect_find_all()
            .returning(move || Ok(vec![sample_room_with_type(id_room, id_roomtype)]));

        let service = RoomQueryService::new(Arc::new(repo));
        let response = service.find_all().await.unwrap();

        assert_eq!(response.data.len(), 1);
        let room = &response.data[0];
        assert_eq!(room.id_room, id_room);
        assert_eq!(room.status, "available");
        assert_eq!(room.room_type.id_roomtype, id_roomtype);
        assert_eq!(room.room_type.price, 100.0);

        // the nested view never carries the display name
        let json = serde_json::to_value(room).unwrap();
        assert!(json["room_type"].get("room_type").is_none());
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let mut repo = MockRoomQueryRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = RoomQueryService::new(Arc::new(repo));
        let err = service.find_by_id(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_by_id_returns_nested_shape() {
        let id_room = Uuid::new_v4();
        let id_roomtype = Uuid::new_v4();

        let mut repo = MockRoomQueryRepo::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(sample_room_with_type(id_room, id_roomtype))));

        let service = RoomQueryService::new(Arc::new(repo));
        let response = service.find_by_id(id_room).await.unwrap();

        assert_eq!(response.data.id_room, id_room);
        assert_eq!(response.data.room_type.id_roomtype, id_roomtype);
    }
}
