//! Admin management of company profiles and memberships.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::companies::{AddCompanyForm, AddMemberForm, UpdateCompanyForm};
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::companies::COMPANY_FILTER_KEYS;
use crate::services::{ServiceError, companies as companies_service};

#[get("/admin/companies")]
pub async fn admin_companies(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), COMPANY_FILTER_KEYS);

    match companies_service::load_admin_companies(repo.get_ref(), &user, &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                Some(&user),
                "admin_companies",
                &server_config.auth_service_url,
            );
            context.insert("companies", &data.companies);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("companyName"));

            render_template(&tera, "admin/companies.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the company admin list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/companies/add")]
pub async fn add_company(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCompanyForm>,
) -> impl Responder {
    match companies_service::add_company(repo.get_ref(), &user, form) {
        Ok(()) => FlashMessage::success("Company added.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add the company: {err}");
            FlashMessage::error("The company could not be saved.").send();
        }
    }
    redirect("/admin/companies")
}

#[post("/admin/companies/{company_id}/update")]
pub async fn update_company(
    company_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateCompanyForm>,
) -> impl Responder {
    match companies_service::update_company(repo.get_ref(), &user, company_id.into_inner(), form) {
        Ok(()) => FlashMessage::success("Company updated.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to update the company: {err}");
            FlashMessage::error("The company could not be saved.").send();
        }
    }
    redirect("/admin/companies")
}

#[post("/admin/companies/{company_id}/delete")]
pub async fn delete_company(
    company_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match companies_service::delete_company(repo.get_ref(), &user, company_id.into_inner()) {
        Ok(()) => FlashMessage::success("Company deleted.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(err) => {
            log::error!("Failed to delete the company: {err}");
            FlashMessage::error("The company could not be deleted.").send();
        }
    }
    redirect("/admin/companies")
}

#[post("/admin/companies/{company_id}/members/add")]
pub async fn add_company_member(
    company_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddMemberForm>,
) -> impl Responder {
    match companies_service::add_company_member(
        repo.get_ref(),
        &user,
        company_id.into_inner(),
        form,
    ) {
        Ok(()) => FlashMessage::success("Recruiter added to the company.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add the member: {err}");
            FlashMessage::error("The recruiter could not be added.").send();
        }
    }
    redirect("/admin/companies")
}

#[post("/admin/companies/{company_id}/members/{user_id}/remove")]
pub async fn remove_company_member(
    path: web::Path<(i32, i32)>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (company_id, member_id) = path.into_inner();
    match companies_service::remove_company_member(repo.get_ref(), &user, company_id, member_id) {
        Ok(()) => FlashMessage::success("Recruiter removed from the company.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(err) => {
            log::error!("Failed to remove the member: {err}");
            FlashMessage::error("The recruiter could not be removed.").send();
        }
    }
    redirect("/admin/companies")
}
