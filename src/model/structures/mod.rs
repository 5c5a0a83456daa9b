pub mod position;
pub mod role;
