pub mod candidates;
pub mod companies;
pub mod jobs;
pub mod taxonomy;
pub mod users;
