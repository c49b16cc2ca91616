use crate::{
    abstract_trait::{
        room::{
            repository::{DynRoomCommandRepository, DynRoomQueryRepository},
            service::RoomCommandServiceTrait,
        },
        room_type::repository::DynRoomTypeQueryRepository,
    },
    domain::{
        requests::{CreateRoomRequest, UpdateRoomRequest},
        responses::{ApiResponse, RoomResponse},
    },
    errors::{ServiceError, format_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct RoomCommandService {
    command: DynRoomCommandRepository,
    query: DynRoomQueryRepository,
    room_type_query: DynRoomTypeQueryRepository,
}

impl RoomCommandService {
    pub fn new(
        command: DynRoomCommandRepository,
        query: DynRoomQueryRepository,
        room_type_query: DynRoomTypeQueryRepository,
    ) -> Self {
        Self {
            command,
            query,
            room_type_query,
        }
    }

    /// Bare keyed lookup: a soft-deleted room type still satisfies the
    /// reference check.
    async fn ensure_room_type_exists(&self, id: Uuid) -> Result<(), ServiceError> {
        let room_type = self.room_type_query.find_by_id_any(id).await.map_err(|e| {
            error!("💥 Failed to look up room type id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        if room_type.is_none() {
            return Err(ServiceError::NotFound("Room Type does not exist".into()));
        }

        Ok(())
    }

    async fn ensure_room_exists(&self, id: Uuid) -> Result<(), ServiceError> {
        let count = self.query.count_active(id).await.map_err(|e| {
            error!("💥 Failed to check room id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        if count == 0 {
            return Err(ServiceError::NotFound("Room not found".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl RoomCommandServiceTrait for RoomCommandService {
    async fn create(
        &self,
        request: &CreateRoomRequest,
    ) -> Result<ApiResponse<RoomResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating room for room type {}", request.id_roomtype);

        self.ensure_room_type_exists(request.id_roomtype).await?;

        let room = self.command.create(request).await.map_err(|e| {
            error!(
                "💥 Failed to create room for room type {}: {e:?}",
                request.id_roomtype
            );
            ServiceError::from(e)
        })?;

        let response = RoomResponse::from(room);

        info!("✅ Room created successfully with id={}", response.id_room);

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room created successfully".into(),
            data: response,
        })
    }

    async fn update(
        &self,
        request: &UpdateRoomRequest,
    ) -> Result<ApiResponse<RoomResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        let id = request
            .id_room
            .ok_or_else(|| ServiceError::Validation("id_room is required".into()))?;

        info!("🔄 Updating room id={id}");

        self.ensure_room_type_exists(request.id_roomtype).await?;
        self.ensure_room_exists(id).await?;

        let updated = self.command.update(id, request).await.map_err(|e| {
            error!("💥 Failed to update room id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        let response = RoomResponse::from(updated);

        info!("✅ Room updated successfully with id={id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room updated successfully".into(),
            data: response,
        })
    }

    async fn trash(&self, id: Uuid) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Trashing room id={id}");

        self.ensure_room_exists(id).await?;

        self.command.trash(id).await.map_err(|e| {
            error!("💥 Failed to trash room id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Room trashed successfully with id={id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room deleted successfully".into(),
            data: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::{
        MockRoomCommandRepo, MockRoomQueryRepo, MockRoomTypeQueryRepo, sample_room,
        sample_room_type,
    };
    use std::sync::Arc;

    fn service(
        command: MockRoomCommandRepo,
        query: MockRoomQueryRepo,
        room_type_query: MockRoomTypeQueryRepo,
    ) -> RoomCommandService {
        RoomCommandService::new(Arc::new(command), Arc::new(query), Arc::new(room_type_query))
    }

    #[tokio::test]
    async fn create_with_unknown_room_type_is_not_found() {
        let mut command = MockRoomCommandRepo::new();
        command.expect_create().times(0);

        let mut room_type_query = MockRoomTypeQueryRepo::new();
        room_type_query
            .expect_find_by_id_any()
            .returning(|_| Ok(None));

        let svc = service(command, MockRoomQueryRepo::new(), room_type_query);
        let request = CreateRoomRequest {
            id_roomtype: Uuid::new_v4(),
            status: "available".into(),
        };

        let err = svc.create(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_with_known_room_type_persists() {
        let id_roomtype = Uuid::new_v4();
        let id_room = Uuid::new_v4();

        let mut command = MockRoomCommandRepo::new();
        command
            .expect_create()
            .returning(move |_| Ok(sample_room(id_room, id_roomtype)));

        let mut room_type_query = MockRoomTypeQueryRepo::new();
        room_type_query
            .expect_find_by_id_any()
            .returning(move |id| Ok(Some(sample_room_type(id, false))));

        let svc = service(command, MockRoomQueryRepo::new(), room_type_query);
        let request = CreateRoomRequest {
            id_roomtype,
            status: "available".into(),
        };

        let response = svc.create(&request).await.unwrap();
        assert_eq!(response.data.id_room, id_room);
        assert_eq!(response.data.id_roomtype, id_roomtype);
        assert_eq!(response.data.status, "available");
    }

    #[tokio::test]
    async fn create_accepts_soft_deleted_room_type_reference() {
        // soft delete hides a room type from listing, it does not invalidate
        // references to it
        let id_roomtype = Uuid::new_v4();
        let id_room = Uuid::new_v4();

        let mut command = MockRoomCommandRepo::new();
        command
            .expect_create()
            .returning(move |_| Ok(sample_room(id_room, id_roomtype)));

        let mut room_type_query = MockRoomTypeQueryRepo::new();
        room_type_query
            .expect_find_by_id_any()
            .returning(move |id| Ok(Some(sample_room_type(id, true))));

        let svc = service(command, MockRoomQueryRepo::new(), room_type_query);
        let request = CreateRoomRequest {
            id_roomtype,
            status: "available".into(),
        };

        let response = svc.create(&request).await.unwrap();
        assert_eq!(response.data.id_roomtype, id_roomtype);
    }

    #[tokio::test]
    async fn update_missing_room_is_not_found() {
        let mut command = MockRoomCommandRepo::new();
        command.expect_update().times(0);

        let mut query = MockRoomQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(0));

        let mut room_type_query = MockRoomTypeQueryRepo::new();
        room_type_query
            .expect_find_by_id_any()
            .returning(|id| Ok(Some(sample_room_type(id, false))));

        let svc = service(command, query, room_type_query);
        let request = UpdateRoomRequest {
            id_room: Some(Uuid::new_v4()),
            id_roomtype: Uuid::new_v4(),
            status: "maintenance".into(),
        };

        let err = svc.update(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_with_unknown_room_type_does_not_touch_room() {
        let mut command = MockRoomCommandRepo::new();
        command.expect_update().times(0);

        let mut query = MockRoomQueryRepo::new();
        query.expect_count_active().times(0);

        let mut room_type_query = MockRoomTypeQueryRepo::new();
        room_type_query
            .expect_find_by_id_any()
            .returning(|_| Ok(None));

        let svc = service(command, query, room_type_query);
        let request = UpdateRoomRequest {
            id_room: Some(Uuid::new_v4()),
            id_roomtype: Uuid::new_v4(),
            status: "maintenance".into(),
        };

        let err = svc.update(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn trash_missing_room_is_not_found() {
        let mut command = MockRoomCommandRepo::new();
        command.expect_trash().times(0);

        let mut query = MockRoomQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(0));

        let svc = service(command, query, MockRoomTypeQueryRepo::new());
        let err = svc.trash(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn trash_existing_room_acknowledges() {
        let id_room = Uuid::new_v4();
        let id_roomtype = Uuid::new_v4();

        let mut command = MockRoomCommandRepo::new();
        command
            .expect_trash()
            .returning(move |_| Ok(sample_room(id_room, id_roomtype)));

        let mut query = MockRoomQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(1));

        let svc = service(command, query, MockRoomTypeQueryRepo::new());
        let response = svc.trash(id_room).await.unwrap();

        assert_eq!(response.status, "success");
        assert!(response.data);
    }
}
