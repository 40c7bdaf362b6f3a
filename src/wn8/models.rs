use std::iter::Sum;

use serde::{Deserialize, Serialize};

pub type AccountId = i64;
pub type TankId = i32;

/// Account-wide (or single vehicle) random battle totals.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AccountSummary {
    pub battles: i64,
    pub frags: i64,
    pub damage_dealt: i64,
    pub spotted: i64,
    pub dropped_capture_points: i64,
    pub wins: i64,
}

impl AccountSummary {
    /// Removes the vehicle's contribution from the totals.
    ///
    /// The battle count is left as is: the account keeps counting battles played on the excluded
    /// vehicles. The formula never reads it, and the reference scores depend on this.
    pub fn exclude(&mut self, vehicle: &VehicleDetail) {
        let all = &vehicle.all;
        self.damage_dealt -= all.damage_dealt;
        self.spotted -= all.spotted;
        self.frags -= all.frags;
        self.dropped_capture_points -= all.dropped_capture_points;
        self.wins -= all.wins;
    }
}

impl Sum for AccountSummary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut sum = Self::default();
        for component in iter {
            sum.battles += component.battles;
            sum.frags += component.frags;
            sum.damage_dealt += component.damage_dealt;
            sum.spotted += component.spotted;
            sum.dropped_capture_points += component.dropped_capture_points;
            sum.wins += component.wins;
        }
        sum
    }
}

/// Number of battles the account has played on a vehicle.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct VehiclePlayRecord {
    pub tank_id: TankId,
    pub battles: i64,
}

/// Full per-vehicle totals, requested for the accurate calculation only.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub struct VehicleDetail {
    pub tank_id: TankId,
    pub all: AccountSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_keeps_battles_ok() {
        let mut summary = AccountSummary {
            battles: 100,
            frags: 90,
            damage_dealt: 120_000,
            spotted: 110,
            dropped_capture_points: 60,
            wins: 55,
        };
        summary.exclude(&VehicleDetail {
            tank_id: 111,
            all: AccountSummary {
                battles: 40,
                frags: 30,
                damage_dealt: 20_000,
                spotted: 10,
                dropped_capture_points: 5,
                wins: 25,
            },
        });
        assert_eq!(
            summary,
            AccountSummary {
                battles: 100,
                frags: 60,
                damage_dealt: 100_000,
                spotted: 100,
                dropped_capture_points: 55,
                wins: 30,
            }
        );
    }

    #[test]
    fn sum_ok() {
        let one = AccountSummary {
            battles: 2,
            frags: 3,
            damage_dealt: 4,
            spotted: 5,
            dropped_capture_points: 6,
            wins: 1,
        };
        let total: AccountSummary = [one, one, one].into_iter().sum();
        assert_eq!(total.battles, 6);
        assert_eq!(total.damage_dealt, 12);
        assert_eq!(total.wins, 3);
    }
}
