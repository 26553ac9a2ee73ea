//! Admin management of user accounts and roles.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::users::SetRoleForm;
use crate::listing::ListQuery;
use crate::models::auth::AuthenticatedUser;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::users::USER_FILTER_KEYS;
use crate::services::{ServiceError, users as users_service};

#[get("/admin/users")]
pub async fn admin_users(
    req: HttpRequest,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = ListQuery::parse(req.query_string(), USER_FILTER_KEYS);

    match users_service::load_users(repo.get_ref(), &user, &query) {
        Ok(data) => {
            let mut context = base_context(
                &flash_messages,
                Some(&user),
                "admin_users",
                &server_config.auth_service_url,
            );
            context.insert("users", &data.users);
            context.insert("sections", &data.sections);
            context.insert("filter_query", &data.filter_query);
            context.insert("search_query", &query.filters().get("search"));

            render_template(&tera, "admin/users.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load the user list: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/users/{user_id}/role")]
pub async fn set_user_role(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SetRoleForm>,
) -> impl Responder {
    match users_service::set_user_role(repo.get_ref(), &user, user_id.into_inner(), form) {
        Ok(()) => FlashMessage::success("Role updated.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to update the role: {err}");
            FlashMessage::error("The role could not be updated.").send();
        }
    }
    redirect("/admin/users")
}

#[post("/admin/users/{user_id}/delete")]
pub async fn delete_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users_service::delete_user(repo.get_ref(), &user, user_id.into_inner()) {
        Ok(()) => FlashMessage::success("User deleted.").send(),
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Administrator access required.").send();
            return redirect("/na");
        }
        Err(ServiceError::NotFound) => return HttpResponse::NotFound().finish(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to delete the user: {err}");
            FlashMessage::error("The user could not be deleted.").send();
        }
    }
    redirect("/admin/users")
}
