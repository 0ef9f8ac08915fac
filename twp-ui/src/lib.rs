//! Shared Dioxus components and Leaflet bridge for the trip weather planner.
//!
//! This crate provides:
//! - `map_bridge`: Rust wrappers around the Leaflet map via `document::eval` / `js_sys::eval`
//! - `state`: reactive `AppState` signals and the `Services` context
//! - `actions`: async tasks that drive `twp_core` state transitions
//! - `components`: RSX panels rendering `twp_core::view` models

pub mod actions;
pub mod components;
pub mod map_bridge;
pub mod state;
