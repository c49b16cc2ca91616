use crate::{
    abstract_trait::room_type::{
        repository::{DynRoomTypeCommandRepository, DynRoomTypeQueryRepository},
        service::RoomTypeCommandServiceTrait,
    },
    domain::{
        requests::{CreateRoomTypeRequest, UpdateRoomTypeRequest},
        responses::{ApiResponse, RoomTypeResponse},
    },
    errors::{ServiceError, format_validation_errors},
};
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct RoomTypeCommandService {
    command: DynRoomTypeCommandRepository,
    query: DynRoomTypeQueryRepository,
}

impl RoomTypeCommandService {
    pub fn new(command: DynRoomTypeCommandRepository, query: DynRoomTypeQueryRepository) -> Self {
        Self { command, query }
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), ServiceError> {
        let count = self.query.count_active(id).await.map_err(|e| {
            error!("💥 Failed to check room type id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        if count == 0 {
            return Err(ServiceError::NotFound("Room Type not found".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl RoomTypeCommandServiceTrait for RoomTypeCommandService {
    async fn create(
        &self,
        request: &CreateRoomTypeRequest,
    ) -> Result<ApiResponse<RoomTypeResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating room type '{}'", request.room_type);

        let room_type = self.command.create(request).await.map_err(|e| {
            error!(
                "💥 Failed to create room type '{}': {e:?}",
                request.room_type
            );
            ServiceError::from(e)
        })?;

        let response = RoomTypeResponse::from(room_type);

        info!(
            "✅ Room type created successfully with id={}",
            response.id_roomtype
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room type created successfully".into(),
            data: response,
        })
    }

    async fn update(
        &self,
        request: &UpdateRoomTypeRequest,
    ) -> Result<ApiResponse<RoomTypeResponse>, ServiceError> {
        if let Err(validation_errors) = request.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        let id = request
            .id_roomtype
            .ok_or_else(|| ServiceError::Validation("id_roomtype is required".into()))?;

        info!("🔄 Updating room type id={id}");

        self.ensure_exists(id).await?;

        let updated = self.command.update(id, request).await.map_err(|e| {
            error!("💥 Failed to update room type id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        let response = RoomTypeResponse::from(updated);

        info!("✅ Room type updated successfully with id={id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room type updated successfully".into(),
            data: response,
        })
    }

    async fn trash(&self, id: Uuid) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Trashing room type id={id}");

        self.ensure_exists(id).await?;

        self.command.trash(id).await.map_err(|e| {
            error!("💥 Failed to trash room type id={id}: {e:?}");
            ServiceError::from(e)
        })?;

        info!("✅ Room type trashed successfully with id={id}");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Room type deleted successfully".into(),
            data: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::{
        MockRoomTypeCommandRepo, MockRoomTypeQueryRepo, sample_room_type,
    };
    use std::sync::Arc;

    fn service(
        command: MockRoomTypeCommandRepo,
        query: MockRoomTypeQueryRepo,
    ) -> RoomTypeCommandService {
        RoomTypeCommandService::new(Arc::new(command), Arc::new(query))
    }

    #[tokio::test]
    async fn create_returns_persisted_fields() {
        let id = Uuid::new_v4();
        let mut command = MockRoomTypeCommandRepo::new();
        command
            .expect_create()
            .returning(move |_| Ok(sample_room_type(id, false)));

        let svc = service(command, MockRoomTypeQueryRepo::new());
        let request = CreateRoomTypeRequest {
            room_type: "Deluxe".into(),
            price: 100.0,
        };

        let response = svc.create(&request).await.unwrap();

        assert_eq!(response.status, "success");
        assert_eq!(response.data.id_roomtype, id);
        assert_eq!(response.data.room_type, "Deluxe");
        assert_eq!(response.data.price, 100.0);
        // freshly created rows carry identical timestamps
        assert_eq!(response.data.created_at, response.data.updated_at);
    }

    #[tokio::test]
    async fn create_with_empty_name_fails_validation() {
        let mut command = MockRoomTypeCommandRepo::new();
        command.expect_create().times(0);

        let svc = service(command, MockRoomTypeQueryRepo::new());
        let request = CreateRoomTypeRequest {
            room_type: String::new(),
            price: 100.0,
        };

        let err = svc.create(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn update_missing_room_type_is_not_found() {
        let mut command = MockRoomTypeCommandRepo::new();
        command.expect_update().times(0);

        let mut query = MockRoomTypeQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(0));

        let svc = service(command, query);
        let request = UpdateRoomTypeRequest {
            id_roomtype: Some(Uuid::new_v4()),
            room_type: "Suite".into(),
            price: 250.0,
        };

        let err = svc.update(&request).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn trash_missing_room_type_is_not_found() {
        let mut command = MockRoomTypeCommandRepo::new();
        command.expect_trash().times(0);

        let mut query = MockRoomTypeQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(0));

        let svc = service(command, query);
        let err = svc.trash(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn trash_existing_room_type_acknowledges() {
        let id = Uuid::new_v4();

        let mut command = MockRoomTypeCommandRepo::new();
        command
            .expect_trash()
            .returning(move |_| Ok(sample_room_type(id, true)));

        let mut query = MockRoomTypeQueryRepo::new();
        query.expect_count_active().returning(|_| Ok(1));

        let svc = service(command, query);
        let response = svc.trash(id).await.unwrap();

        assert_eq!(response.status, "success");
        assert!(response.data);
    }
}
