//! Food API — library crate for the food record lookup server.
//!
//! Re-exports all modules so the binary (`main.rs`) and the route tests
//! can access internal types like `AppState`, `FoodStore`, and
//! `build_router`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
