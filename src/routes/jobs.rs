//! Recruiter dashboard: managing job postings.

use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::jobs::{AddJobForm, UpdateJobForm, UploadJobsForm};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::jobs::JOB_FILTER_KEYS;
use crate::services::{ServiceError, jobs as jobs_service};

#[get("/dashboard/jobs")]
pub async fn dashboard_jobs(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), JOB_FILTER_KEYS);

    match jobs_service::load_dashboard_jobs(repo.get_ref(), &user, &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                Some(&user),
                "dashboard_jobs",
                &server_config.auth_service_url,
            );
            context.insert("jobs", &data.jobs);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("jobTitle"));

            render_template(&tera, "dashboard/jobs.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to the dashboard.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the dashboard jobs: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dashboard/jobs/add")]
pub async fn add_job(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddJobForm>,
) -> impl Responder {
    match jobs_service::add_job(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Job posted.").send();
            redirect("/dashboard/jobs")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You cannot post jobs for this company.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/dashboard/jobs")
        }
        Err(err) => {
            log::error!("Failed to add the job: {err}");
            FlashMessage::error("The job could not be saved.").send();
            redirect("/dashboard/jobs")
        }
    }
}

#[post("/dashboard/jobs/upload/{company_id}")]
pub async fn upload_jobs(
    company_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(mut form): MultipartForm<UploadJobsForm>,
) -> impl Responder {
    match jobs_service::upload_jobs(repo.get_ref(), &user, company_id.into_inner(), &mut form) {
        Ok(count) => {
            FlashMessage::success(format!("{count} jobs imported.")).send();
            redirect("/dashboard/jobs")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You cannot post jobs for this company.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/dashboard/jobs")
        }
        Err(err) => {
            log::error!("Failed to import jobs: {err}");
            FlashMessage::error("The jobs could not be imported.").send();
            redirect("/dashboard/jobs")
        }
    }
}

#[post("/dashboard/jobs/{job_id}/update")]
pub async fn update_job(
    job_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateJobForm>,
) -> impl Responder {
    match jobs_service::update_job(repo.get_ref(), &user, job_id.into_inner(), form) {
        Ok(()) => {
            FlashMessage::success("Job updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You cannot edit this job.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().finish();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update the job: {err}");
            FlashMessage::error("The job could not be saved.").send();
        }
    }
    redirect("/dashboard/jobs")
}

#[post("/dashboard/jobs/{job_id}/delete")]
pub async fn delete_job(
    job_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match jobs_service::delete_job(repo.get_ref(), &user, job_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Job deleted.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You cannot delete this job.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().finish();
        }
        Err(err) => {
            log::error!("Failed to delete the job: {err}");
            FlashMessage::error("The job could not be deleted.").send();
        }
    }
    redirect("/dashboard/jobs")
}
