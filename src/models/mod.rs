use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod lot;
pub mod manager;
pub mod request;
pub mod spot;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (row, col) position within a parking lot grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Parses the `"row,col"` encoding used by the spot routes.
    /// Anything that is not exactly two non-negative integer fields
    /// (wrong field count, non-numeric, negative) yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(',');
        let row = parts.next()?.parse().ok()?;
        let col = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, col })
    }
}
