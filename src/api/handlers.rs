use std::sync::Mutex;

use actix_web::web;

use crate::models::manager::ParkingLotManager;

pub mod lots;
pub mod spots;

/// Shared application state: the lot manager behind a request-serialising
/// lock. The core assumes serialized access; this is where the API layer
/// provides it.
pub type ManagerState = web::Data<Mutex<ParkingLotManager>>;
