pub mod cli;
pub mod error;
pub mod events;
pub mod render;
pub mod session;
pub mod types;
pub mod utils;
pub mod validate;
pub mod workout;
