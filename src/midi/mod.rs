pub mod dump;
pub mod error;
pub mod loader;
pub mod notes;
pub mod reader;
pub mod timebase;
pub mod track;
pub mod utils;
