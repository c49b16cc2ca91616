mod command;
mod query;

pub use self::command::{DynRoomCommandService, RoomCommandServiceTrait};
pub use self::query::{DynRoomQueryService, RoomQueryServiceTrait};
