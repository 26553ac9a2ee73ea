//! Admin management of the filter vocabularies.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::taxonomy::{AddEntryForm, AddSalaryRangeForm};
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, taxonomy as taxonomy_service};

#[get("/admin/taxonomy")]
pub async fn admin_taxonomy(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match taxonomy_service::load_taxonomy(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                Some(&user),
                "admin_taxonomy",
                &server_config.auth_service_url,
            );
            let sections = data
                .sections
                .iter()
                .map(|section| (section.kind.as_str(), &section.entries))
                .collect::<Vec<_>>();
            context.insert("sections", &sections);
            context.insert("salary_ranges", &data.salary_ranges);

            render_template(&tera, "admin/taxonomy.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the taxonomy page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/taxonomy/{kind}/add")]
pub async fn add_taxonomy_entry(
    kind: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddEntryForm>,
) -> impl Responder {
    match taxonomy_service::add_entry(repo.get_ref(), &user, &kind, form) {
        Ok(()) => FlashMessage::success("Entry added.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add the entry: {err}");
            FlashMessage::error("The entry could not be added.").send();
        }
    }
    redirect("/admin/taxonomy")
}

#[post("/admin/taxonomy/salaries/add-range")]
pub async fn add_salary_range(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddSalaryRangeForm>,
) -> impl Responder {
    match taxonomy_service::add_salary_range(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Salary range added.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add the salary range: {err}");
            FlashMessage::error("The salary range could not be added.").send();
        }
    }
    redirect("/admin/taxonomy")
}

#[post("/admin/taxonomy/{kind}/{entry_id}/delete")]
pub async fn delete_taxonomy_entry(
    path: web::Path<(String, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (kind, entry_id) = path.into_inner();
    match taxonomy_service::delete_entry(repo.get_ref(), &user, &kind, entry_id) {
        Ok(()) => FlashMessage::success("Entry removed.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to remove the entry: {err}");
            FlashMessage::error("The entry could not be removed.").send();
        }
    }
    redirect("/admin/taxonomy")
}
