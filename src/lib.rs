pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod session;
pub mod templates_structs;
