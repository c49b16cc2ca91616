use shared::{
    abstract_trait::{
        room::{
            repository::{DynRoomCommandRepository, DynRoomQueryRepository},
            service::{DynRoomCommandService, DynRoomQueryService},
        },
        room_type::{
            repository::{DynRoomTypeCommandRepository, DynRoomTypeQueryRepository},
            service::{DynRoomTypeCommandService, DynRoomTypeQueryService},
        },
    },
    config::ConnectionPool,
    repository::{
        room::{command::RoomCommandRepository, query::RoomQueryRepository},
        room_type::{command::RoomTypeCommandRepository, query::RoomTypeQueryRepository},
    },
    service::{
        room::{command::RoomCommandService, query::RoomQueryService},
        room_type::{command::RoomTypeCommandService, query::RoomTypeQueryService},
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct RoomTypeDeps {
    pub query_repo: DynRoomTypeQueryRepository,
    pub command_repo: DynRoomTypeCommandRepository,
    pub query_service: DynRoomTypeQueryService,
    pub command_service: DynRoomTypeCommandService,
}

impl RoomTypeDeps {
    pub fn new(db: ConnectionPool) -> Self {
        let query_repo =
            Arc::new(RoomTypeQueryRepository::new(db.clone())) as DynRoomTypeQueryRepository;
        let command_repo =
            Arc::new(RoomTypeCommandRepository::new(db)) as DynRoomTypeCommandRepository;

        let query_service =
            Arc::new(RoomTypeQueryService::new(query_repo.clone())) as DynRoomTypeQueryService;
        let command_service = Arc::new(RoomTypeCommandService::new(
            command_repo.clone(),
            query_repo.clone(),
        )) as DynRoomTypeCommandService;

        Self {
            query_repo,
            command_repo,
            query_service,
            command_service,
        }
    }
}

#[derive(Clone)]
pub struct RoomDeps {
    pub query_repo: DynRoomQueryRepository,
    pub command_repo: DynRoomCommandRepository,
    pub query_service: DynRoomQueryService,
    pub command_service: DynRoomCommandService,
}

impl RoomDeps {
    pub fn new(db: ConnectionPool, room_type_query: DynRoomTypeQueryRepository) -> Self {
        let query_repo = Arc::new(RoomQueryRepository::new(db.clone())) as DynRoomQueryRepository;
        let command_repo = Arc::new(RoomCommandRepository::new(db)) as DynRoomCommandRepository;

        let query_service =
            Arc::new(RoomQueryService::new(query_repo.clone())) as DynRoomQueryService;
        let command_service = Arc::new(RoomCommandService::new(
            command_repo.clone(),
            query_repo.clone(),
            room_type_query,
        )) as DynRoomCommandService;

        Self {
            query_repo,
            command_repo,
            query_service,
            command_service,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub room_type: RoomTypeDeps,
    pub room: RoomDeps,
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool) -> Self {
        let room_type = RoomTypeDeps::new(db.clone());
        let room = RoomDeps::new(db, room_type.query_repo.clone());

        Self { room_type, room }
    }
}
