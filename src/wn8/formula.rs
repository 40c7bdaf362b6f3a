//! The WN8 formula itself.
//!
//! See <https://wiki.wargaming.net/en/Player_Ratings_(WoT)#WN8>.

use crate::wn8::aggregator::ExpectedSums;
use crate::wn8::error::{Component, Error, Result};
use crate::wn8::models::AccountSummary;

/// Normalized ratios after the floor and ceiling clamps.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ClampedRatios {
    pub win: f64,
    pub damage: f64,
    pub frag: f64,
    pub spot: f64,
    pub def: f64,
}

impl ClampedRatios {
    pub fn new(summary: &AccountSummary, sums: &ExpectedSums) -> Result<Self> {
        let r_damage = ratio(summary.damage_dealt, sums.damage, Component::Damage)?;
        let r_spot = ratio(summary.spotted, sums.spot, Component::Spot)?;
        let r_frag = ratio(summary.frags, sums.frags, Component::Frags)?;
        let r_def = ratio(summary.dropped_capture_points, sums.def, Component::Def)?;
        let r_win = ratio(summary.wins, sums.win, Component::Win)?;

        let win = f64::max(0.0, (r_win - 0.71) / (1.0 - 0.71));
        let damage = f64::max(0.0, (r_damage - 0.22) / (1.0 - 0.22));
        Ok(Self {
            win,
            damage,
            frag: f64::max(0.0, f64::min(damage + 0.2, (r_frag - 0.12) / (1.0 - 0.12))),
            spot: f64::max(0.0, f64::min(damage + 0.1, (r_spot - 0.38) / (1.0 - 0.38))),
            def: f64::max(0.0, f64::min(damage + 0.1, (r_def - 0.10) / (1.0 - 0.10))),
        })
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        980.0 * self.damage
            + 210.0 * self.damage * self.frag
            + 155.0 * self.frag * self.spot
            + 75.0 * self.def * self.frag
            + 145.0 * f64::min(1.8, self.win)
    }
}

/// Calculates WN8 rounded to two decimal places.
pub fn score(summary: &AccountSummary, sums: &ExpectedSums) -> Result<f64> {
    Ok(round_to_cents(ClampedRatios::new(summary, sums)?.score()))
}

/// Rounds half away from zero to two decimal places.
///
/// The scaled value is first cut to 15 significant digits, so that `1.005`, which is stored as
/// `1.00499…`, still rounds up to `1.01`.
fn round_to_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    let cents = format!("{:.14e}", cents).parse::<f64>().unwrap_or(cents);
    cents.round() / 100.0
}

fn ratio(actual: i64, expected: f64, component: Component) -> Result<f64> {
    if expected != 0.0 {
        Ok(actual as f64 / expected)
    } else if actual == 0 {
        Ok(0.0)
    } else {
        Err(Error::DivisionDegenerate { component })
    }
}
