use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_v1_candidates, api_v1_companies, api_v1_jobs};
use crate::routes::candidates::{dashboard_candidates, set_candidate_status};
use crate::routes::companies::{
    add_company, add_company_member, admin_companies, delete_company, remove_company_member,
    update_company,
};
use crate::routes::jobs::{add_job, dashboard_jobs, delete_job, update_job, upload_jobs};
use crate::routes::main::{
    apply_job, logout, not_assigned, show_companies, show_company, show_index, show_job,
};
use crate::routes::taxonomy::{
    add_salary_range, add_taxonomy_entry, admin_taxonomy, delete_taxonomy_entry,
};
use crate::routes::users::{admin_users, delete_user, set_user_role};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Role granting full administrative access.
pub const ADMIN_ROLE: &str = "admin";
/// Role granting access to the recruiter dashboard for assigned companies.
pub const RECRUITER_ROLE: &str = "recruiter";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(api_v1_jobs)
                    .service(api_v1_companies)
                    .service(api_v1_candidates),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(show_job)
                    .service(apply_job)
                    .service(show_companies)
                    .service(show_company)
                    .service(not_assigned)
                    .service(dashboard_jobs)
                    .service(add_job)
                    .service(upload_jobs)
                    .service(update_job)
                    .service(delete_job)
                    .service(dashboard_candidates)
                    .service(set_candidate_status)
                    .service(admin_users)
                    .service(set_user_role)
                    .service(delete_user)
                    .service(admin_companies)
                    .service(add_company)
                    .service(update_company)
                    .service(delete_company)
                    .service(add_company_member)
                    .service(remove_company_member)
                    .service(admin_taxonomy)
                    .service(add_taxonomy_entry)
                    .service(add_salary_range)
                    .service(delete_taxonomy_entry)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
