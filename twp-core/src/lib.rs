//! Core library for the trip weather planner client.
//!
//! Everything here is DOM-free so it can be unit tested natively:
//! - `geo`: coordinate normalization and the selected location
//! - `factor` / `prefs`: weather factors, units and the preference reader
//! - `plan`: wire types for plan results and saved trips
//! - `flip`: fallback flip-risk estimator
//! - `view`: pure result -> view-model transforms consumed by the UI crate
//! - `state`: the application state object and its transitions
//! - `api`: the `Backend` trait, its reqwest implementation and the pipeline
//! - `config` / `error` / `time`: ambient pieces shared by the above

pub mod api;
pub mod config;
pub mod error;
pub mod factor;
pub mod flip;
pub mod geo;
pub mod plan;
pub mod prefs;
pub mod state;
pub mod time;
pub mod view;

pub use config::PlannerConfig;
pub use error::{ApiError, PlanError};
pub use factor::Factor;
