use crate::{
    abstract_trait::{
        room::repository::{RoomCommandRepositoryTrait, RoomQueryRepositoryTrait},
        room_type::repository::{RoomTypeCommandRepositoryTrait, RoomTypeQueryRepositoryTrait},
    },
    domain::requests::{
        CreateRoomRequest, CreateRoomTypeRequest, UpdateRoomRequest, UpdateRoomTypeRequest,
    },
    errors::RepositoryError,
    model::{
        room::{RoomModel, RoomWithTypeModel},
        room_type::RoomTypeModel,
    },
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockall::mock;
use uuid::Uuid;

mock! {
    pub RoomTypeQueryRepo {}

    #[async_trait]
    impl RoomTypeQueryRepositoryTrait for RoomTypeQueryRepo {
        async fn find_all(&self) -> Result<Vec<RoomTypeModel>, RepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError>;
        async fn find_by_id_any(&self, id: Uuid) -> Result<Option<RoomTypeModel>, RepositoryError>;
        async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError>;
    }
}

mock! {
    pub RoomTypeCommandRepo {}

    #[async_trait]
    impl RoomTypeCommandRepositoryTrait for RoomTypeCommandRepo {
        async fn create(
            &self,
            request: &CreateRoomTypeRequest,
        ) -> Result<RoomTypeModel, RepositoryError>;
        async fn update(
            &self,
            id: Uuid,
            request: &UpdateRoomTypeRequest,
        ) -> Result<RoomTypeModel, RepositoryError>;
        async fn trash(&self, id: Uuid) -> Result<RoomTypeModel, RepositoryError>;
    }
}

mock! {
    pub RoomQueryRepo {}

    #[async_trait]
    impl RoomQueryRepositoryTrait for RoomQueryRepo {
        async fn find_all(&self) -> Result<Vec<RoomWithTypeModel>, RepositoryError>;
        async fn find_by_id(&self, id: Uuid) -> Result<Option<RoomWithTypeModel>, RepositoryError>;
        async fn count_active(&self, id: Uuid) -> Result<i64, RepositoryError>;
    }
}

mock! {
    pub RoomCommandRepo {}

    #[async_trait]
    impl RoomCommandRepositoryTrait for RoomCommandRepo {
        async fn create(&self, request: &CreateRoomRequest) -> Result<RoomModel, RepositoryError>;
        async fn update(
            &self,
            id: Uuid,
            request: &UpdateRoomRequest,
        ) -> Result<RoomModel, RepositoryError>;
        async fn trash(&self, id: Uuid) -> Result<RoomModel, RepositoryError>;
    }
}

pub fn sample_timestamp() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-03-01 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn sample_room_type(id: Uuid, deleted: bool) -> RoomTypeModel {
    RoomTypeModel {
        id_roomtype: id,
        room_type: "Deluxe".to_string(),
        price: 100.0,
        created_at: Some(sample_timestamp()),
        updated_at: Some(sample_timestamp()),
        deleted,
    }
}

pub fn sample_room(id: Uuid, id_roomtype: Uuid) -> RoomModel {
    RoomModel {
        id_room: id,
        id_roomtype,
        status: "available".to_string(),
        created_at: Some(sample_timestamp()),
        updated_at: Some(sample_timestamp()),
        deleted: false,
    }
}

pub fn sample_room_with_type(id: Uuid, id_roomtype: Uuid) -> RoomWithTypeModel {
    RoomWithTypeModel {
        id_room: id,
        id_roomtype,
        status: "available".to_string(),
        created_at: Some(sample_timestamp()),
        updated_at: Some(sample_timestamp()),
        deleted: false,
        room_type_price: 100.0,
        room_type_created_at: Some(sample_timestamp()),
        room_type_updated_at: Some(sample_timestamp()),
    }
}
