//! HTTP request handlers

pub mod health;
pub mod pages;
pub mod reports;
