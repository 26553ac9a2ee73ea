//! Recruiter dashboard: reviewing candidates.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::candidates::SetStatusForm;
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::candidates::CANDIDATE_FILTER_KEYS;
use crate::services::{ServiceError, candidates as candidates_service};

#[get("/dashboard/candidates")]
pub async fn dashboard_candidates(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), CANDIDATE_FILTER_KEYS);

    match candidates_service::load_candidates(repo.get_ref(), &user, &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                Some(&user),
                "dashboard_candidates",
                &server_config.auth_service_url,
            );
            context.insert("applications", &data.applications);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("search"));

            render_template(&tera, "dashboard/candidates.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You do not have access to the dashboard.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the candidate list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/dashboard/candidates/{application_id}/status")]
pub async fn set_candidate_status(
    application_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetStatusForm>,
) -> impl Responder {
    match candidates_service::set_application_status(
        repo.get_ref(),
        &user,
        application_id.into_inner(),
        form,
    ) {
        Ok(()) => {
            FlashMessage::success("Application updated.").send();
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("You cannot review this application.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => {
            return HttpResponse::NotFound().finish();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to update the application: {err}");
            FlashMessage::error("The application could not be updated.").send();
        }
    }
    redirect("/dashboard/candidates")
}
