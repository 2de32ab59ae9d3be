use std::sync::Mutex;

use actix_web::{test, web, App};
use carpark::api::routes::configure;
use carpark::data::sample::create_sample_data;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(Mutex::new(create_sample_data())))
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

// ---------------------------------------------------------------------------
// GET /api/lots
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_lots_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/lots").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_lots_returns_all_four_sample_lots() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/lots").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let payload = body["payload"].as_array().expect("payload must be an array");
    assert_eq!(payload.len(), 4);
    assert_eq!(body["pagination"]["total"], 4);
}

#[actix_web::test]
async fn test_get_lots_items_have_required_fields() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/lots").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    for item in body["payload"].as_array().unwrap() {
        let summary = &item["payload"];
        assert!(summary.get("name").is_some(), "Each lot must have a 'name' field");
        assert!(summary.get("hourlyRate").is_some(), "Each lot must have an 'hourlyRate' field");
        assert!(summary.get("formattedRate").is_some(), "Each lot must have a 'formattedRate' field");
        assert!(summary.get("availableSpots").is_some(), "Each lot must have 'availableSpots'");
        assert!(summary.get("totalSpots").is_some(), "Each lot must have 'totalSpots'");
    }
}

#[actix_web::test]
async fn test_get_lots_formats_rates_with_two_decimals() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/lots").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let first = &body["payload"][0]["payload"];
    assert_eq!(first["name"], "Downtown Mall");
    assert_eq!(first["formattedRate"], "$3.50/hour");
}

// ---------------------------------------------------------------------------
// GET /api/lots/{name}
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_lot_known_name_returns_200() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_get_lot_returns_grid_and_counts() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let lot = &body["payload"];
    assert_eq!(lot["rows"], 4);
    assert_eq!(lot["cols"], 6);
    assert_eq!(lot["totalSpots"], 24);
    assert_eq!(lot["availableSpots"], 19);
    assert_eq!(lot["occupiedSpots"], 5);
    let grid = lot["grid"].as_array().expect("grid must be an array");
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|row| row.as_array().unwrap().len() == 6));
}

#[actix_web::test]
async fn test_get_lot_grid_shows_preoccupied_spot() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let cell = &body["payload"]["grid"][0][0];
    assert_eq!(cell["occupied"], true);
    assert_eq!(cell["vehicleId"], "ABC123");
    assert_eq!(cell["occupationTime"], "0m");
}

#[actix_web::test]
async fn test_get_lot_unknown_name_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Mega%20Garage")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_get_lot_unknown_name_returns_error_message() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Mega%20Garage")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let error_msg = body.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert!(!error_msg.is_empty(), "An error message must be returned for an unknown lot");
}

// ---------------------------------------------------------------------------
// GET /api/lots/current and PUT /api/lots/current
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_current_lot_is_first_sample_lot() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get().uri("/api/lots/current").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Downtown Mall");
}

#[actix_web::test]
async fn test_put_current_lot_switches_selection() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "name": "Airport Terminal" });
    let req = test::TestRequest::put()
        .uri("/api/lots/current")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Airport Terminal");

    let req = test::TestRequest::get().uri("/api/lots/current").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Airport Terminal");
}

#[actix_web::test]
async fn test_put_current_lot_unknown_name_returns_404_and_keeps_selection() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "name": "Mega Garage" });
    let req = test::TestRequest::put()
        .uri("/api/lots/current")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/api/lots/current").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["name"], "Downtown Mall");
}

#[actix_web::test]
async fn test_put_current_lot_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::put()
        .uri("/api/lots/current")
        .insert_header(("content-type", "application/json"))
        .set_payload("{invalid json}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// GET /api/lots/{name}/spots/{coords}
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_get_spot_occupied_cell() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall/spots/0,0")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["occupied"], true);
    assert_eq!(body["payload"]["vehicleId"], "ABC123");
}

#[actix_web::test]
async fn test_get_spot_vacant_cell() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall/spots/3,5")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["occupied"], false);
    assert_eq!(body["payload"]["occupationTime"], "Available");
    assert!(
        body["payload"].get("vehicleId").is_none(),
        "A vacant spot must not expose a vehicle id"
    );
}

#[actix_web::test]
async fn test_get_spot_malformed_coordinates_return_404() {
    let app = test::init_service(build_app()).await;
    for coords in ["abc", "1", "1,2,3", "1,x", "-1,2"] {
        let req = test::TestRequest::get()
            .uri(&format!("/api/lots/Downtown%20Mall/spots/{coords}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404, "Coordinates '{coords}' must read as absent");
    }
}

#[actix_web::test]
async fn test_get_spot_out_of_range_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall/spots/9,9")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

// ---------------------------------------------------------------------------
// POST /api/lots/{name}/spots/{coords}/occupy
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_occupy_free_spot_decrements_availability() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "NEW001" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/occupy")
        .set_json(&payload)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["availableSpots"], 18);
    assert_eq!(body["payload"]["grid"][3][5]["vehicleId"], "NEW001");
}

#[actix_web::test]
async fn test_occupy_same_spot_twice_returns_409() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "NEW001" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let payload = serde_json::json!({ "vehicleId": "NEW002" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_occupy_preoccupied_spot_returns_409_and_keeps_vehicle() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "LATE99" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/0,0/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let req = test::TestRequest::get()
        .uri("/api/lots/Downtown%20Mall/spots/0,0")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["vehicleId"], "ABC123", "The original vehicle must keep the spot");
}

#[actix_web::test]
async fn test_occupy_blank_vehicle_id_returns_400() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "   " });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_occupy_out_of_range_returns_404() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "NEW001" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/4,0/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_occupy_unknown_lot_returns_404() {
    let app = test::init_service(build_app()).await;
    let payload = serde_json::json!({ "vehicleId": "NEW001" });
    let req = test::TestRequest::post()
        .uri("/api/lots/Mega%20Garage/spots/0,0/occupy")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_occupy_malformed_json_returns_400() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/occupy")
        .insert_header(("content-type", "application/json"))
        .set_payload("{invalid json}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// POST /api/lots/{name}/spots/{coords}/vacate
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_vacate_occupied_spot_increments_availability() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/0,0/vacate")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["availableSpots"], 20);
    assert_eq!(body["payload"]["grid"][0][0]["occupied"], false);
}

#[actix_web::test]
async fn test_vacate_vacant_spot_returns_409() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/3,5/vacate")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn test_vacate_out_of_range_returns_404() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/lots/Downtown%20Mall/spots/9,9/vacate")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
