use serde::Deserialize;

use crate::wn8::models::AccountSummary;

/// Wargaming.net account information, only the fields requested by the client.
#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct AccountInfo {
    pub statistics: AccountInfoStatistics,
}

#[derive(Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct AccountInfoStatistics {
    pub all: AccountSummary,
}
