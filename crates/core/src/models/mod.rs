pub mod interview;
pub mod time_slot;
pub mod user;
