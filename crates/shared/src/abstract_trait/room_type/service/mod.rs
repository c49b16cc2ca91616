mod command;
mod query;

pub use self::command::{DynRoomTypeCommandService, RoomTypeCommandServiceTrait};
pub use self::query::{DynRoomTypeQueryService, RoomTypeQueryServiceTrait};
