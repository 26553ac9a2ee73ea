//! HTTP handlers and the small helpers they share. Handlers parse the
//! request, delegate to a service, and turn the result into a rendered
//! template, a redirect with a flash message, or JSON.

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;

pub mod api;
pub mod candidates;
pub mod companies;
pub mod jobs;
pub mod main;
pub mod taxonomy;
pub mod users;

/// Whether the role list carries the given role.
pub fn check_role(role: &str, roles: &[String]) -> bool {
    roles.iter().any(|r| r == role)
}

/// Guards a handler behind a role; the `Err` branch is the response to
/// return, a redirect to `redirect_to` (default `/na`).
pub fn ensure_role(
    user: &AuthenticatedUser,
    role: &str,
    redirect_to: Option<&str>,
) -> Result<(), HttpResponse> {
    if check_role(role, &user.roles) {
        Ok(())
    } else {
        Err(redirect(redirect_to.unwrap_or("/na")))
    }
}

/// 303 redirect, the response to every successful form post.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location.to_string()))
        .finish()
}

/// Maps a flash level onto the alert class the templates use.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Renders a template, logging and answering 500 on failure.
pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Seeds the context every page template expects: alerts, the signed-in
/// user (if any), the active nav item and the sign-in service URL.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    auth_service_url: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("auth_service_url", auth_service_url);
    context
}
