mod room;
mod room_type;

pub use self::room::{CreateRoomRequest, UpdateRoomRequest};
pub use self::room_type::{CreateRoomTypeRequest, UpdateRoomTypeRequest};
