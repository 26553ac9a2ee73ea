//! Authenticated-user claims extracted from the session token.
//!
//! Sign-in itself happens on the external auth service; this application only
//! verifies the JWT it issued and reads the role and company-membership
//! claims out of it. Handlers receive the user as an explicit extractor
//! argument, so every consumption site of the shared user state is visible.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Subject: the user id as issued by the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Role strings, e.g. `admin` or `recruiter`.
    pub roles: Vec<String>,
    /// Companies the user manages, for recruiter scoping.
    #[serde(default)]
    pub companies: Vec<i32>,
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Numeric user id behind the subject claim, if well-formed.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    /// Whether the user manages the given company.
    pub fn member_of(&self, company_id: i32) -> bool {
        self.companies.contains(&company_id)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let identity = Identity::from_request(req, payload)
                .into_inner()
                .map_err(|_| ErrorUnauthorized("not signed in"))?;
            let token = identity
                .id()
                .map_err(|_| ErrorUnauthorized("session lost"))?;
            let config = req
                .app_data::<web::Data<ServerConfig>>()
                .ok_or_else(|| ErrorInternalServerError("server configuration missing"))?;

            let claims = decode::<AuthenticatedUser>(
                &token,
                &DecodingKey::from_secret(config.secret.as_bytes()),
                &Validation::new(Algorithm::HS256),
            )
            .map_err(|_| ErrorUnauthorized("invalid token"))?;

            Ok(claims.claims)
        })();
        ready(result)
    }
}
