use crate::wn8::expected::ExpectedValueTable;
use crate::wn8::models::{AccountSummary, TankId, VehicleDetail, VehiclePlayRecord};

/// Battle-weighted sums of the expected values over the account's vehicles.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct ExpectedSums {
    pub damage: f64,
    pub frags: f64,
    pub spot: f64,
    pub def: f64,

    /// Expected number of wins, the win rate percentages are already scaled by `0.01`.
    pub win: f64,
}

#[derive(Debug, PartialEq)]
pub enum Aggregation {
    /// The account has no vehicles at all, the score is zero.
    NoPlayData,

    Aggregated {
        sums: ExpectedSums,

        /// Vehicles without expected values, in the order of the records.
        missing: Vec<TankId>,
    },
}

pub fn aggregate(records: &[VehiclePlayRecord], table: &ExpectedValueTable) -> Aggregation {
    if records.is_empty() {
        return Aggregation::NoPlayData;
    }

    let mut sums = ExpectedSums::default();
    let mut missing = Vec::new();

    for record in records {
        match table.get(record.tank_id) {
            Some(expected) => {
                let battles = record.battles as f64;
                sums.damage += expected.damage * battles;
                sums.spot += expected.spot * battles;
                sums.frags += expected.frag * battles;
                sums.def += expected.def * battles;
                sums.win += 0.01 * expected.win_rate * battles;
            }
            None => missing.push(record.tank_id),
        }
    }

    Aggregation::Aggregated { sums, missing }
}

/// Subtracts the missing vehicles from the account summary, see [`AccountSummary::exclude`].
pub fn correct(summary: &mut AccountSummary, missing: &[VehicleDetail]) {
    for vehicle in missing {
        summary.exclude(vehicle);
    }
}
