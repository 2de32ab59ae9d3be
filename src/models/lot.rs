use serde::{Deserialize, Serialize};

use crate::models::{spot::ParkingSpot, Matrix};

/// A parking lot: a fixed-size grid of spots plus pricing and identity
/// metadata. The grid is owned exclusively by the lot; occupancy only ever
/// changes through [`ParkingLot::occupy_spot`] and [`ParkingLot::vacate_spot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    name: String,
    hourly_rate: f64,
    rows: usize,
    cols: usize,
    spots: Matrix<ParkingSpot>,
}

impl ParkingLot {
    /// Builds a lot with every spot initially unoccupied.
    pub fn new(name: impl Into<String>, hourly_rate: f64, rows: usize, cols: usize) -> Self {
        let spots = (0..rows)
            .map(|_| (0..cols).map(|_| ParkingSpot::default()).collect())
            .collect();
        Self {
            name: name.into(),
            hourly_rate,
            rows,
            cols,
            spots,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn is_valid_coordinates(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Read-only view of the spot at (row, col), `None` when out of bounds.
    pub fn get_spot(&self, row: usize, col: usize) -> Option<&ParkingSpot> {
        if self.is_valid_coordinates(row, col) {
            Some(&self.spots[row][col])
        } else {
            None
        }
    }

    pub fn total_spots(&self) -> usize {
        self.rows * self.cols
    }

    /// Counts currently unoccupied spots with a full grid scan, so the
    /// result always reflects current truth under interleaved mutation.
    pub fn available_spots(&self) -> usize {
        self.spots
            .iter()
            .flat_map(|row| row.iter())
            .filter(|spot| !spot.is_occupied())
            .count()
    }

    pub fn occupied_spots(&self) -> usize {
        self.total_spots() - self.available_spots()
    }

    /// Attempts to occupy the spot at (row, col) with `vehicle_id`.
    /// Returns `false` without mutating anything when the coordinates are
    /// out of bounds or the spot is already taken.
    pub fn occupy_spot(&mut self, row: usize, col: usize, vehicle_id: impl Into<String>) -> bool {
        if !self.is_valid_coordinates(row, col) {
            return false;
        }
        let spot = &mut self.spots[row][col];
        if spot.is_occupied() {
            return false;
        }
        spot.occupy(vehicle_id);
        true
    }

    /// Attempts to vacate the spot at (row, col). Returns `false` when the
    /// coordinates are out of bounds or the spot is already vacant.
    pub fn vacate_spot(&mut self, row: usize, col: usize) -> bool {
        if !self.is_valid_coordinates(row, col) {
            return false;
        }
        let spot = &mut self.spots[row][col];
        if !spot.is_occupied() {
            return false;
        }
        spot.vacate();
        true
    }
}
