use crate::models::{lot::ParkingLot, manager::ParkingLotManager};

/// Builds the demo dataset: four lots of varying size and pricing with a
/// handful of spots pre-occupied. The first lot added (Downtown Mall)
/// becomes the manager's current selection.
pub fn create_sample_data() -> ParkingLotManager {
    let mut manager = ParkingLotManager::new();

    let mut downtown_mall = ParkingLot::new("Downtown Mall", 3.50, 4, 6);
    downtown_mall.occupy_spot(0, 0, "ABC123");
    downtown_mall.occupy_spot(0, 1, "XYZ789");
    downtown_mall.occupy_spot(1, 2, "DEF456");
    downtown_mall.occupy_spot(2, 3, "GHI789");
    downtown_mall.occupy_spot(3, 4, "JKL012");

    let mut airport_terminal = ParkingLot::new("Airport Terminal", 5.00, 3, 8);
    airport_terminal.occupy_spot(0, 0, "AIR001");
    airport_terminal.occupy_spot(0, 1, "AIR002");
    airport_terminal.occupy_spot(1, 3, "AIR003");
    airport_terminal.occupy_spot(2, 5, "AIR004");
    airport_terminal.occupy_spot(2, 6, "AIR005");

    let mut university_campus = ParkingLot::new("University Campus", 2.00, 5, 5);
    university_campus.occupy_spot(0, 0, "STU001");
    university_campus.occupy_spot(1, 1, "STU002");
    university_campus.occupy_spot(2, 2, "STU003");
    university_campus.occupy_spot(3, 3, "STU004");
    university_campus.occupy_spot(4, 4, "STU005");
    university_campus.occupy_spot(0, 4, "STU006");
    university_campus.occupy_spot(4, 0, "STU007");

    let mut city_hospital = ParkingLot::new("City Hospital", 4.25, 3, 7);
    city_hospital.occupy_spot(0, 0, "HOS001");
    city_hospital.occupy_spot(0, 1, "HOS002");
    city_hospital.occupy_spot(1, 2, "HOS003");
    city_hospital.occupy_spot(2, 4, "HOS004");
    city_hospital.occupy_spot(2, 5, "HOS005");
    city_hospital.occupy_spot(2, 6, "HOS006");

    manager.add_lot(downtown_mall);
    manager.add_lot(airport_terminal);
    manager.add_lot(university_campus);
    manager.add_lot(city_hospital);

    manager
}
