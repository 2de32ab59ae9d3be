use crate::models::lot::ParkingLot;

/// Registry of parking lots with a single current-selection pointer.
/// Lots are owned exclusively by the manager for the life of the process;
/// there is no removal operation, so `current` never dangles and never
/// returns to unset once bound.
#[derive(Debug, Default)]
pub struct ParkingLotManager {
    lots: Vec<ParkingLot>,
    current: Option<usize>,
}

impl ParkingLotManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lot. The first lot added to an empty manager becomes the
    /// current selection; later insertions never change it.
    pub fn add_lot(&mut self, lot: ParkingLot) {
        self.lots.push(lot);
        if self.current.is_none() {
            self.current = Some(self.lots.len() - 1);
        }
    }

    /// Independent snapshot of the managed lots. Mutating the returned
    /// vector (or the lots inside it) leaves the manager untouched.
    pub fn all_lots(&self) -> Vec<ParkingLot> {
        self.lots.clone()
    }

    pub fn current_lot(&self) -> Option<&ParkingLot> {
        self.current.and_then(|index| self.lots.get(index))
    }

    /// Selects the lot at `index` as current. Membership is positional:
    /// an out-of-range index returns `false` and leaves the selection
    /// unchanged.
    pub fn set_current_lot(&mut self, index: usize) -> bool {
        if index < self.lots.len() {
            self.current = Some(index);
            true
        } else {
            false
        }
    }

    /// Selects the first lot whose name matches. Returns `false` when no
    /// lot has that name.
    pub fn set_current_lot_by_name(&mut self, name: &str) -> bool {
        match self.lots.iter().position(|lot| lot.name() == name) {
            Some(index) => self.set_current_lot(index),
            None => false,
        }
    }

    /// First-match linear search by name.
    pub fn get_lot_by_name(&self, name: &str) -> Option<&ParkingLot> {
        self.lots.iter().find(|lot| lot.name() == name)
    }

    /// Mutable first-match lookup; the seam through which occupy/vacate
    /// requests reach a lot.
    pub fn get_lot_by_name_mut(&mut self, name: &str) -> Option<&mut ParkingLot> {
        self.lots.iter_mut().find(|lot| lot.name() == name)
    }
}
