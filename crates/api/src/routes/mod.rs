pub mod directory;
pub mod health;
pub mod interviews;
pub mod slots;
