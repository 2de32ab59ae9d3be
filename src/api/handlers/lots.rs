use std::collections::HashMap;
use std::sync::PoisonError;

use actix_web::{get, http::Method, put, web, HttpResponse, Responder};

use crate::{
    api::handlers::ManagerState,
    logic::status::{lot_status, lot_summary},
    models::request::{
        link, ApiResponse, ErrorResponse, Links, LotApiResponse, LotListResponse, LotSummary,
        PaginatedResponse, Pagination, SelectLotRequest,
    },
};

fn lot_links(name: &str) -> Links {
    let mut links = HashMap::new();
    links.insert("self".into(), link(format!("/api/lots/{name}"), Method::GET));
    links.insert("collection".into(), link("/api/lots", Method::GET));
    links.insert("select".into(), link("/api/lots/current", Method::PUT));
    links
}

fn lot_not_found(name: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Parking lot '{}' not found.", name)
    }))
}

/// GET /api/lots
/// Returns every parking lot with its availability counts.
#[utoipa::path(
    get,
    path = "/api/lots",
    tag = "lots",
    responses(
        (status = 200, description = "All parking lots with availability counts", body = LotListResponse),
    )
)]
#[get("/lots")]
pub async fn list_lots(state: ManagerState) -> impl Responder {
    let manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    let lots = manager.all_lots();
    let total = lots.len();
    let items: Vec<ApiResponse<LotSummary>> = lots
        .iter()
        .map(|lot| {
            let name = lot.name();
            let mut links = HashMap::new();
            links.insert("self".into(), link(format!("/api/lots/{name}"), Method::GET));
            links.insert("select".into(), link("/api/lots/current", Method::PUT));
            ApiResponse::new(lot_summary(lot), links)
        })
        .collect();
    let mut collection_links = HashMap::new();
    collection_links.insert("self".into(), link("/api/lots", Method::GET));
    collection_links.insert("current".into(), link("/api/lots/current", Method::GET));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        collection_links,
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/lots/current
/// Returns the full status of the currently selected lot.
#[utoipa::path(
    get,
    path = "/api/lots/current",
    tag = "lots",
    responses(
        (status = 200, description = "Status of the currently selected lot", body = LotApiResponse),
        (status = 404, description = "No lot is currently selected", body = ErrorResponse),
    )
)]
#[get("/lots/current")]
pub async fn get_current_lot(state: ManagerState) -> impl Responder {
    let manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    match manager.current_lot() {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No parking lot is currently selected."
        })),
        Some(lot) => {
            let links = lot_links(lot.name());
            HttpResponse::Ok().json(ApiResponse::new(lot_status(lot), links))
        }
    }
}

/// PUT /api/lots/current
/// Selects the lot with the given name as current.
#[utoipa::path(
    put,
    path = "/api/lots/current",
    tag = "lots",
    request_body = SelectLotRequest,
    responses(
        (status = 200, description = "Selection changed; status of the newly current lot", body = LotApiResponse),
        (status = 404, description = "No lot with this name; selection unchanged", body = ErrorResponse),
    )
)]
#[put("/lots/current")]
pub async fn set_current_lot(body: web::Json<SelectLotRequest>, state: ManagerState) -> impl Responder {
    let name = body.into_inner().name;
    let mut manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    if manager.set_current_lot_by_name(&name) {
        if let Some(lot) = manager.current_lot() {
            let links = lot_links(lot.name());
            return HttpResponse::Ok().json(ApiResponse::new(lot_status(lot), links));
        }
    }
    lot_not_found(&name)
}

/// GET /api/lots/{name}
/// Returns the full status of one lot, spot grid included.
#[utoipa::path(
    get,
    path = "/api/lots/{name}",
    tag = "lots",
    params(("name" = String, Path, description = "Parking lot name")),
    responses(
        (status = 200, description = "Full lot status with the per-spot grid", body = LotApiResponse),
        (status = 404, description = "No lot with this name", body = ErrorResponse),
    )
)]
#[get("/lots/{name}")]
pub async fn get_lot(path: web::Path<String>, state: ManagerState) -> impl Responder {
    let name = path.into_inner();
    let manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    match manager.get_lot_by_name(&name) {
        None => lot_not_found(&name),
        Some(lot) => {
            let links = lot_links(&name);
            HttpResponse::Ok().json(ApiResponse::new(lot_status(lot), links))
        }
    }
}
