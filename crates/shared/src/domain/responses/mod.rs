mod api;
mod room;
mod room_type;

pub use self::api::ApiResponse;
pub use self::room::{RoomDetailResponse, RoomResponse, RoomTypeSummaryResponse};
pub use self::room_type::RoomTypeResponse;
