use std::sync::Mutex;

use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use carpark::{api::openapi::ApiDoc, data::sample::create_sample_data};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let bind_addr = "0.0.0.0:8080";
    let manager = create_sample_data();
    log::info!("Seeded {} parking lots", manager.all_lots().len());
    let state = web::Data::new(Mutex::new(manager));

    println!("🅿️  Carpark API started at http://{bind_addr}");
    println!("   GET  /api/lots");
    println!("   GET  /api/lots/current");
    println!("   PUT  /api/lots/current");
    println!("   GET  /api/lots/{{name}}");
    println!("   GET  /api/lots/{{name}}/spots/{{row,col}}");
    println!("   POST /api/lots/{{name}}/spots/{{row,col}}/occupy");
    println!("   POST /api/lots/{{name}}/spots/{{row,col}}/vacate");
    println!("   ");
    println!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    println!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(carpark::api::routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
