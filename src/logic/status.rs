use crate::models::{
    lot::ParkingLot,
    request::{LotStatusResponse, LotSummary, SpotView},
    spot::ParkingSpot,
    Matrix,
};

/// Display format for hourly rates, e.g. `"$3.50/hour"`.
pub fn format_hourly_rate(rate: f64) -> String {
    format!("${rate:.2}/hour")
}

/// Projects one spot into its client-facing view.
pub fn spot_view(spot: &ParkingSpot, row: usize, col: usize) -> SpotView {
    SpotView {
        row,
        col,
        occupied: spot.is_occupied(),
        vehicle_id: spot.vehicle_id().map(String::from),
        occupation_time: spot.formatted_occupation_time(),
    }
}

/// Header-line view of a lot: identity, pricing, aggregate counts.
pub fn lot_summary(lot: &ParkingLot) -> LotSummary {
    LotSummary {
        name: lot.name().to_string(),
        hourly_rate: lot.hourly_rate(),
        formatted_rate: format_hourly_rate(lot.hourly_rate()),
        rows: lot.rows(),
        cols: lot.cols(),
        available_spots: lot.available_spots(),
        occupied_spots: lot.occupied_spots(),
        total_spots: lot.total_spots(),
    }
}

/// Full status of a lot, including the per-spot grid in row-major order.
pub fn lot_status(lot: &ParkingLot) -> LotStatusResponse {
    let grid: Matrix<SpotView> = (0..lot.rows())
        .map(|row| {
            (0..lot.cols())
                .filter_map(|col| lot.get_spot(row, col).map(|spot| spot_view(spot, row, col)))
                .collect()
        })
        .collect();

    let summary = lot_summary(lot);
    LotStatusResponse {
        name: summary.name,
        hourly_rate: summary.hourly_rate,
        formatted_rate: summary.formatted_rate,
        rows: summary.rows,
        cols: summary.cols,
        available_spots: summary.available_spots,
        occupied_spots: summary.occupied_spots,
        total_spots: summary.total_spots,
        grid,
    }
}
