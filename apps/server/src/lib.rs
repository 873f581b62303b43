pub mod api;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{announce_startup, build_state, init_tracing, AppState};
