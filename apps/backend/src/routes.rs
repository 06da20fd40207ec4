use actix_web::web;

pub mod todos;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(users::configure_routes)
        .configure(todos::configure_routes);
}
