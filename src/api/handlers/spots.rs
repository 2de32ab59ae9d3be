use std::collections::HashMap;
use std::sync::PoisonError;

use actix_web::{get, http::Method, post, web, HttpResponse, Responder};

use crate::{
    api::handlers::ManagerState,
    logic::status::{lot_status, spot_view},
    models::{
        request::{
            link, ApiResponse, ErrorResponse, Links, LotApiResponse, OccupyRequest,
            SpotApiResponse,
        },
        Coordinate,
    },
};

fn spot_links(name: &str, coords: &str) -> Links {
    let mut links = HashMap::new();
    links.insert(
        "self".into(),
        link(format!("/api/lots/{name}/spots/{coords}"), Method::GET),
    );
    links.insert(
        "occupy".into(),
        link(format!("/api/lots/{name}/spots/{coords}/occupy"), Method::POST),
    );
    links.insert(
        "vacate".into(),
        link(format!("/api/lots/{name}/spots/{coords}/vacate"), Method::POST),
    );
    links.insert("lot".into(), link(format!("/api/lots/{name}"), Method::GET));
    links
}

fn lot_not_found(name: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Parking lot '{}' not found.", name)
    }))
}

/// Covers malformed coordinate strings as well as out-of-range cells:
/// both are simply "no such spot", never an error.
fn spot_not_found(name: &str, coords: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Spot '{}' not found in parking lot '{}'.", coords, name)
    }))
}

/// GET /api/lots/{name}/spots/{coords}
/// Returns the display state of a single spot.
#[utoipa::path(
    get,
    path = "/api/lots/{name}/spots/{coords}",
    tag = "spots",
    params(
        ("name" = String, Path, description = "Parking lot name"),
        ("coords" = String, Path, description = "Spot coordinates encoded as \"row,col\"")
    ),
    responses(
        (status = 200, description = "Spot display state", body = SpotApiResponse),
        (status = 404, description = "Unknown lot, malformed coordinates or out-of-range spot", body = ErrorResponse),
    )
)]
#[get("/lots/{name}/spots/{coords}")]
pub async fn get_spot(path: web::Path<(String, String)>, state: ManagerState) -> impl Responder {
    let (name, coords) = path.into_inner();
    let manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    let lot = match manager.get_lot_by_name(&name) {
        None => return lot_not_found(&name),
        Some(lot) => lot,
    };
    match Coordinate::parse(&coords) {
        None => spot_not_found(&name, &coords),
        Some(coordinate) => match lot.get_spot(coordinate.row, coordinate.col) {
            None => spot_not_found(&name, &coords),
            Some(spot) => HttpResponse::Ok().json(ApiResponse::new(
                spot_view(spot, coordinate.row, coordinate.col),
                spot_links(&name, &coords),
            )),
        },
    }
}

/// POST /api/lots/{name}/spots/{coords}/occupy
/// Occupies a spot for the given vehicle and returns the refreshed lot status.
#[utoipa::path(
    post,
    path = "/api/lots/{name}/spots/{coords}/occupy",
    tag = "spots",
    params(
        ("name" = String, Path, description = "Parking lot name"),
        ("coords" = String, Path, description = "Spot coordinates encoded as \"row,col\"")
    ),
    request_body = OccupyRequest,
    responses(
        (status = 200, description = "Spot occupied; refreshed lot status", body = LotApiResponse),
        (status = 400, description = "Blank vehicle id", body = ErrorResponse),
        (status = 404, description = "Unknown lot, malformed coordinates or out-of-range spot", body = ErrorResponse),
        (status = 409, description = "Spot is already occupied", body = ErrorResponse),
    )
)]
#[post("/lots/{name}/spots/{coords}/occupy")]
pub async fn occupy_spot(
    path: web::Path<(String, String)>,
    body: web::Json<OccupyRequest>,
    state: ManagerState,
) -> impl Responder {
    let (name, coords) = path.into_inner();
    let vehicle_id = body.into_inner().vehicle_id.trim().to_string();
    if vehicle_id.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Vehicle id must not be empty."
        }));
    }
    let mut manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    let lot = match manager.get_lot_by_name_mut(&name) {
        None => return lot_not_found(&name),
        Some(lot) => lot,
    };
    match Coordinate::parse(&coords) {
        None => spot_not_found(&name, &coords),
        Some(coordinate) => {
            if lot.occupy_spot(coordinate.row, coordinate.col, vehicle_id) {
                let links = spot_links(&name, &coords);
                HttpResponse::Ok().json(ApiResponse::new(lot_status(lot), links))
            } else if lot.get_spot(coordinate.row, coordinate.col).is_some() {
                HttpResponse::Conflict().json(serde_json::json!({
                    "error": format!(
                        "Spot '{}' in parking lot '{}' is already occupied.",
                        coords, name
                    )
                }))
            } else {
                spot_not_found(&name, &coords)
            }
        }
    }
}

/// POST /api/lots/{name}/spots/{coords}/vacate
/// Vacates a spot and returns the refreshed lot status.
#[utoipa::path(
    post,
    path = "/api/lots/{name}/spots/{coords}/vacate",
    tag = "spots",
    params(
        ("name" = String, Path, description = "Parking lot name"),
        ("coords" = String, Path, description = "Spot coordinates encoded as \"row,col\"")
    ),
    responses(
        (status = 200, description = "Spot vacated; refreshed lot status", body = LotApiResponse),
        (status = 404, description = "Unknown lot, malformed coordinates or out-of-range spot", body = ErrorResponse),
        (status = 409, description = "Spot is not occupied", body = ErrorResponse),
    )
)]
#[post("/lots/{name}/spots/{coords}/vacate")]
pub async fn vacate_spot(path: web::Path<(String, String)>, state: ManagerState) -> impl Responder {
    let (name, coords) = path.into_inner();
    let mut manager = state.lock().unwrap_or_else(PoisonError::into_inner);
    let lot = match manager.get_lot_by_name_mut(&name) {
        None => return lot_not_found(&name),
        Some(lot) => lot,
    };
    match Coordinate::parse(&coords) {
        None => spot_not_found(&name, &coords),
        Some(coordinate) => {
            if lot.vacate_spot(coordinate.row, coordinate.col) {
                let links = spot_links(&name, &coords);
                HttpResponse::Ok().json(ApiResponse::new(lot_status(lot), links))
            } else if lot.get_spot(coordinate.row, coordinate.col).is_some() {
                HttpResponse::Conflict().json(serde_json::json!({
                    "error": format!("Spot '{}' in parking lot '{}' is not occupied.", coords, name)
                }))
            } else {
                spot_not_found(&name, &coords)
            }
        }
    }
}
