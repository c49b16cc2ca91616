use crate::{
    abstract_trait::room_type::{
        repository::DynRoomTypeQueryRepository, service::RoomTypeQueryServiceTrait,
    },
    domain::responses::{ApiResponse, RoomTypeResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct RoomTypeQueryService {
    query: DynRoomTypeQueryRepository,
}

impl RoomTypeQueryService {
    pub fn new(query: DynRoomTypeQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl RoomTypeQueryServiceTrait for RoomTypeQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<RoomTypeResponse>>, ServiceError> {
        info!("📋 Fetching all room types");

        let room_types = self.query.find_all().await.map_err(|e| {
            error!("💥 Failed to fetch room types: {e:?}");
            ServiceError::from(e)
        })?;

        let data = room_types.into_iter().map(RoomTypeResponse::from).collect();

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room types fetched successfully".into(),
            data,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<RoomTypeResponse>, ServiceError> {
        info!("🔍 Fetching room type id={id}");

        let room_type = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!("💥 Failed to fetch room type id={id}: {e:?}");
                ServiceError::from(e)
            })?
            .ok_or_else(|| ServiceError::NotFound("Room Type not found".into()))?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room type fetched successfully".into(),
            data: RoomTypeResponse::from(room_type),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::{MockRoomTypeQueryRepo, sample_room_type};
    use std::sync::Arc;

    #[tokio::test]
    async fn find_all_maps_rows_to_responses() {
        let id = Uuid::new_v4();
        let mut repo = MockRoomTypeQueryRepo::new();
        repo.expect_find_all()
            .returning(move || Ok(vec![sample_room_type(id, false)]));

        let service = RoomTypeQueryService::new(Arc::new(repo));
        let response = service.find_all().await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id_roomtype, id);
        assert_eq!(response.data[0].room_type, "Deluxe");
        assert_eq!(response.data[0].price, 100.0);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_not_found() {
        let mut repo = MockRoomTypeQueryRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = RoomTypeQueryService::new(Arc::new(repo));
        let err = service.find_by_id(Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_by_id_returns_entity() {
        let id = Uuid::new_v4();
        let mut repo = MockRoomTypeQueryRepo::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(sample_room_type(id, false))));

        let service = RoomTypeQueryService::new(Arc::new(repo));
        let response = service.find_by_id(id).await.unwrap();

        assert_eq!(response.data.id_roomtype, id);
        assert!(response.data.created_at.is_some());
    }
}
