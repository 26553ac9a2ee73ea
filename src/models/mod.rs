//! Database and infrastructure models.

pub mod application;
pub mod auth;
pub mod company;
pub mod config;
pub mod job;
pub mod taxonomy;
pub mod user;
