use super::truck_status::TruckStatus;

/// Number of haul trucks (and mine-profile lanes) in a session.
pub const FLEET_SIZE: usize = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct Truck {
    pub id: String,          // "T01".."T14", fixed for the session
    pub status: TruckStatus, // band derived from progress
    pub progress: f64,       // position along the round trip, [0, 100)
    pub weight: f64,         // tonnes
    pub speed: u32,          // km/h
    pub shovel_id: String,   // loading point
}

impl Truck {
    /// Truck parked at the start of its route: empty, no payload, not moving.
    ///
    /// `lane` is zero-based; the id is one-based and zero-padded (`T01`).
    pub fn new(lane: usize, shovel_id: &str) -> Self {
        Self {
            id: truck_id(lane),
            status: TruckStatus::Empty,
            progress: 0.0,
            weight: 0.0,
            speed: 0,
            shovel_id: shovel_id.to_string(),
        }
    }
}

pub fn truck_id(lane: usize) -> String {
    format!("T{:02}", lane + 1)
}

/// Seed fleet for a new session.
pub fn initial_fleet(shovel_id: &str) -> Vec<Truck> {
    (0..FLEET_SIZE).map(|lane| Truck::new(lane, shovel_id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fleet_has_fourteen_unique_ids() {
        let fleet = initial_fleet("SH-1");
        assert_eq!(fleet.len(), FLEET_SIZE);

        let ids: HashSet<_> = fleet.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), FLEET_SIZE);
        assert_eq!(fleet[0].id, "T01");
        assert_eq!(fleet[13].id, "T14");
    }

    #[test]
    fn fleet_starts_empty_at_origin() {
        for t in initial_fleet("SH-1") {
            assert_eq!(t.status, TruckStatus::Empty);
            assert_eq!(t.progress, 0.0);
            assert_eq!(t.weight, 0.0);
            assert_eq!(t.speed, 0);
            assert_eq!(t.shovel_id, "SH-1");
        }
    }
}
