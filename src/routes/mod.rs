// Route exports
pub mod recommendations;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommendations::configure);
}
