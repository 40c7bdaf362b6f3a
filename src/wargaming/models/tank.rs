use serde::Deserialize;

use crate::wn8::models::{TankId, VehiclePlayRecord};

/// Item of `account/tanks`.
#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct AccountTank {
    pub tank_id: TankId,
    pub statistics: AccountTankStatistics,
}

#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct AccountTankStatistics {
    pub battles: i64,
}

impl From<AccountTank> for VehiclePlayRecord {
    fn from(tank: AccountTank) -> Self {
        Self {
            tank_id: tank.tank_id,
            battles: tank.statistics.battles,
        }
    }
}
