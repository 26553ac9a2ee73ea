pub mod api;
pub mod candidates;
pub mod companies;
pub mod filters;
pub mod jobs;
pub mod taxonomy;
pub mod users;
