use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod blog;
mod contact;
mod json_error;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(blog::config_routes)
        .configure(projects::config_routes)
        .configure(contact::config_routes);

    cfg.configure(json_error::config_routes);
}
