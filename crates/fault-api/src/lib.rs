//! # fault-api
//!
//! HTTP server for the fault report application, built with Axum.
//! Serves the JSON API plus the submission and admin HTML views.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
