pub mod details;
pub mod directory;
pub mod interviews;
pub mod slots;
