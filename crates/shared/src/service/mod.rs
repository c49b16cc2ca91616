pub mod room;
pub mod room_type;

#[cfg(test)]
pub(crate) mod mocks;
