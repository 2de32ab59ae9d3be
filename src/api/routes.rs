use actix_web::web;

use crate::api::handlers::{
    lots::{get_current_lot, get_lot, list_lots, set_current_lot},
    spots::{get_spot, occupy_spot, vacate_spot},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // "/lots/current" must be registered before "/lots/{name}" so the
    // selection routes are not swallowed by the name matcher.
    cfg.service(
        web::scope("/api")
            .service(list_lots)
            .service(get_current_lot)
            .service(set_current_lot)
            .service(get_lot)
            .service(get_spot)
            .service(occupy_spot)
            .service(vacate_spot),
    );
}
