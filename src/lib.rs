pub mod app;
pub mod config;
pub mod errors;
pub mod lessons;
pub mod state;
