pub mod analysis;
pub mod config;
pub mod gesture;
pub mod hand;
pub mod trajectory;
