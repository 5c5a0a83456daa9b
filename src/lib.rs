pub mod args;
pub mod database;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod utils;
