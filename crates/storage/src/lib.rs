#![warn(clippy::pedantic)]

pub mod memory;
pub mod record;

pub use memory::MemoryStorage;
pub use record::RecordError;
