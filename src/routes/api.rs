//! JSON listing API. Every endpoint answers the canonical
//! `{data, pagination: {total, totalPages}}` shape; errors carry an optional
//! `{message}` body the HTTP list client surfaces to the user.

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use log::error;

use crate::dto::api::{ApiError, ListResponse};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::candidates::CANDIDATE_FILTER_KEYS;
use crate::services::companies::COMPANY_FILTER_KEYS;
use crate::services::jobs::JOB_FILTER_KEYS;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/jobs")]
pub async fn api_v1_jobs(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), JOB_FILTER_KEYS);

    match api_service::list_jobs(repo.get_ref(), &query) {
        Ok(result) => HttpResponse::Ok().json(ListResponse::from(result)),
        Err(err) => {
            error!("Failed to list jobs: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("The list could not be loaded."))
        }
    }
}

#[get("/v1/companies")]
pub async fn api_v1_companies(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), COMPANY_FILTER_KEYS);

    match api_service::list_companies(repo.get_ref(), &query) {
        Ok(result) => HttpResponse::Ok().json(ListResponse::from(result)),
        Err(err) => {
            error!("Failed to list companies: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("The list could not be loaded."))
        }
    }
}

#[get("/v1/candidates")]
pub async fn api_v1_candidates(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), CANDIDATE_FILTER_KEYS);

    match api_service::list_candidates(repo.get_ref(), &user, &query) {
        Ok(result) => HttpResponse::Ok().json(ListResponse::from(result)),
        Err(ServiceError::Unauthorized) => {
            HttpResponse::Forbidden().json(ApiError::new("Reviewer access required."))
        }
        Err(err) => {
            error!("Failed to list candidates: {err}");
            HttpResponse::InternalServerError().json(ApiError::new("The list could not be loaded."))
        }
    }
}
