//! Public pages: the job board, the company catalogue, detail pages, and
//! the apply workflow.

use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::candidates::ApplyForm;
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::companies::COMPANY_FILTER_KEYS;
use crate::services::jobs::JOB_FILTER_KEYS;
use crate::services::{ServiceError, candidates as candidates_service, companies as companies_service, jobs as jobs_service};

#[get("/")]
pub async fn show_index(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), JOB_FILTER_KEYS);

    match jobs_service::load_job_board(repo.get_ref(), &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                user.as_ref(),
                "jobs",
                &server_config.auth_service_url,
            );
            context.insert("jobs", &data.jobs);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("jobTitle"));
            context.insert("location_query", &query.filters().get("location"));

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the job board: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/jobs/{job_id}")]
pub async fn show_job(
    job_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match jobs_service::load_job_detail(repo.get_ref(), user.as_ref(), job_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                user.as_ref(),
                "jobs",
                &server_config.auth_service_url,
            );
            context.insert("job", &data.job);
            context.insert("company", &data.company);
            context.insert("already_applied", &data.already_applied);

            render_template(&tera, "main/job.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load the job page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/jobs/{job_id}/apply")]
pub async fn apply_job(
    job_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ApplyForm>,
) -> impl Responder {
    let job_id = job_id.into_inner();
    match candidates_service::apply_to_job(repo.get_ref(), &user, job_id, form) {
        Ok(()) => {
            FlashMessage::success("Your application has been submitted.").send();
        }
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().finish();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to submit the application: {err}");
            FlashMessage::error("The application could not be submitted.").send();
        }
    }
    redirect(&format!("/jobs/{job_id}"))
}

#[get("/companies")]
pub async fn show_companies(
    req: HttpRequest,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), COMPANY_FILTER_KEYS);

    match companies_service::load_company_catalogue(repo.get_ref(), &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                user.as_ref(),
                "companies",
                &server_config.auth_service_url,
            );
            context.insert("companies", &data.companies);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("companyName"));
            context.insert("location_query", &query.filters().get("location"));

            render_template(&tera, "main/companies.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the company catalogue: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/companies/{company_id}")]
pub async fn show_company(
    company_id: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match companies_service::load_company_detail(repo.get_ref(), company_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                user.as_ref(),
                "companies",
                &server_config.auth_service_url,
            );
            context.insert("company", &data.company);
            context.insert("jobs", &data.jobs);

            render_template(&tera, "main/company.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to load the company page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/")
}

#[get("/na")]
pub async fn not_assigned(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(
        &flash_messages,
        user.as_ref(),
        "na",
        &server_config.auth_service_url,
    );
    render_template(&tera, "main/not_assigned.html", &context)
}
