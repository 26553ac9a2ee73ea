//! Domain entities and value objects for the job board.

pub mod application;
pub mod company;
pub mod job;
pub mod taxonomy;
pub mod types;
pub mod user;
