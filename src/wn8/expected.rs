use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::prelude::AHashMap;
use crate::wn8::error::{Error, Result};
use crate::wn8::models::TankId;

/// Expected values of a single vehicle, as published in the XVM `wn8exp.json`.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct VehicleExpectedValue {
    #[serde(rename = "IDNum")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub tank_id: TankId,

    #[serde(rename = "expDef")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub def: f64,

    #[serde(rename = "expFrag")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub frag: f64,

    #[serde(rename = "expSpot")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub spot: f64,

    #[serde(rename = "expDamage")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub damage: f64,

    /// Percentage, `55.3` stands for 55.3%.
    #[serde(rename = "expWinRate")]
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub win_rate: f64,
}

/// Read-only lookup of the expected values by tank ID.
///
/// A vehicle missing here is not an error: such vehicles are simply excluded from the
/// calculation and reported as «missing».
#[derive(Debug, Clone)]
pub struct ExpectedValueTable(AHashMap<TankId, VehicleExpectedValue>);

impl ExpectedValueTable {
    /// Builds the table. Later rows win over earlier ones with the same tank ID.
    pub fn new(rows: impl IntoIterator<Item = VehicleExpectedValue>) -> Result<Self> {
        let table: AHashMap<TankId, VehicleExpectedValue> = rows.into_iter().map(|row| (row.tank_id, row)).collect();
        if table.is_empty() {
            return Err(Error::DataUnavailable);
        }
        Ok(Self(table))
    }

    #[inline]
    pub fn get(&self, tank_id: TankId) -> Option<&VehicleExpectedValue> {
        self.0.get(&tank_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
