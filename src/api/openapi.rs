use utoipa::OpenApi;

use crate::models::{
    request::{
        ErrorResponse, Link, LotApiResponse, LotListResponse, LotStatusResponse, LotSummary,
        LotSummaryApiResponse, OccupyRequest, Pagination, SelectLotRequest, SpotApiResponse,
        SpotView,
    },
    Coordinate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Carpark Status API",
        description = "Parking lot status service: browse lots, inspect per-spot occupancy with elapsed times, occupy and vacate spots, and switch the currently selected lot.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::lots::list_lots,
        crate::api::handlers::lots::get_current_lot,
        crate::api::handlers::lots::set_current_lot,
        crate::api::handlers::lots::get_lot,
        crate::api::handlers::spots::get_spot,
        crate::api::handlers::spots::occupy_spot,
        crate::api::handlers::spots::vacate_spot,
    ),
    components(
        schemas(
            // Core views
            Coordinate, SpotView, LotSummary, LotStatusResponse,
            // Request bodies
            OccupyRequest, SelectLotRequest,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            LotApiResponse,
            LotSummaryApiResponse,
            SpotApiResponse,
            LotListResponse,
        )
    ),
    tags(
        (name = "lots",  description = "Parking lots — list, detail, current-lot selection"),
        (name = "spots", description = "Parking spots — status, occupy, vacate"),
    )
)]
pub struct ApiDoc;
