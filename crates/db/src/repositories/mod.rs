pub mod directory;
pub mod interview;
pub mod time_slot;
