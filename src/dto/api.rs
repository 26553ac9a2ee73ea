//! Wire shapes of the JSON listing API.
//!
//! Every `/api/v1` list endpoint answers with [`ListResponse`]; the shape is
//! shared with the HTTP list client so the two sides cannot drift apart.

pub use crate::listing::fetch::{ListResponse, PageInfo};

use serde::Serialize;

/// Body of a non-2xx API response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
