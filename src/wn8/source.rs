use crate::prelude::*;
use crate::wn8::models::{AccountId, AccountSummary, TankId, VehicleDetail, VehiclePlayRecord};

/// Everything the calculator needs from the outside world.
///
/// Implementations are free to retry, cache or throttle, errors are passed through as is.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Looks up accounts by the exact nickname.
    async fn resolve_account(&self, nickname: &str) -> Result<Vec<AccountId>>;

    async fn fetch_account_summary(&self, account_id: AccountId) -> Result<AccountSummary>;

    /// Battle counts of every vehicle the account has played.
    async fn fetch_vehicle_records(&self, account_id: AccountId) -> Result<Vec<VehiclePlayRecord>>;

    /// Full totals of the specified vehicles.
    async fn fetch_vehicle_detail(&self, account_id: AccountId, tank_ids: &[TankId]) -> Result<Vec<VehicleDetail>>;

    async fn fetch_vehicle_names(&self, tank_ids: &[TankId]) -> Result<AHashMap<TankId, String>>;
}
