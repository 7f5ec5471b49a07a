//! Extracurricular activity signups for Mergington High School.
//!
//! Students sign up for, or drop out of, a fixed catalog of activities. The
//! catalog lives in memory for the lifetime of the process:
//!
//! - [`database`] owns the catalog behind a single lock and seeds it at start-up
//! - [`services::roster_service`] holds the signup and unregister rules
//! - [`web`] maps HTTP routes onto the service and errors onto status codes
//!
//! Nothing is persisted; a restart returns every roster to its seed state.
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;
