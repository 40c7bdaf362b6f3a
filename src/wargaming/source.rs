use crate::prelude::*;
use crate::wargaming::{AccountId, TankId, WargamingApi};
use crate::wn8::models::{AccountSummary, VehicleDetail, VehiclePlayRecord};
use crate::wn8::DataSource;

#[async_trait]
impl DataSource for WargamingApi {
    async fn resolve_account(&self, nickname: &str) -> Result<Vec<AccountId>> {
        let accounts = self.search_accounts(nickname).await?;
        debug!(
            n_accounts = accounts.len(),
            first = ?accounts.first().map(|account| &account.nickname),
            "found"
        );
        Ok(accounts.into_iter().map(|account| account.id).collect())
    }

    async fn fetch_account_summary(&self, account_id: AccountId) -> Result<AccountSummary> {
        self.get_account_info(account_id)
            .await?
            .map(|info| info.statistics.all)
            .ok_or_else(|| anyhow!("account #{} does not exist", account_id))
    }

    async fn fetch_vehicle_records(&self, account_id: AccountId) -> Result<Vec<VehiclePlayRecord>> {
        Ok(self
            .get_account_tanks(account_id)
            .await?
            .into_iter()
            .map(VehiclePlayRecord::from)
            .collect())
    }

    async fn fetch_vehicle_detail(&self, account_id: AccountId, tank_ids: &[TankId]) -> Result<Vec<VehicleDetail>> {
        self.get_tanks_stats(account_id, tank_ids).await
    }

    async fn fetch_vehicle_names(&self, tank_ids: &[TankId]) -> Result<AHashMap<TankId, String>> {
        Ok(self
            .get_vehicles(tank_ids)
            .await?
            .into_iter()
            .map(|(tank_id, vehicle)| (tank_id, vehicle.name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::de::DeserializeOwned;

    use super::*;
    use crate::prelude::*;
    use crate::reference;
    use crate::wargaming::response::ApiResponse;
    use crate::wargaming::{AccountInfo, AccountTank, FoundAccount, ResultMap, Vehicle};
    use crate::wn8::{AccountQuery, ScoringOptions, ScoringSession};

    const ACCOUNT_ID: &str = "530190876";

    /// Serves the recorded API responses from `fixtures/`.
    struct FixtureSource;

    fn parse<T: DeserializeOwned>(json: &str) -> Result<T> {
        serde_json::from_str::<ApiResponse<T>>(json)?.into()
    }

    #[async_trait]
    impl DataSource for FixtureSource {
        async fn resolve_account(&self, _nickname: &str) -> Result<Vec<AccountId>> {
            let accounts: Vec<FoundAccount> = parse(include_str!("../../fixtures/account_list.json"))?;
            Ok(accounts.into_iter().map(|account| account.id).collect())
        }

        async fn fetch_account_summary(&self, _account_id: AccountId) -> Result<AccountSummary> {
            let mut infos: ResultMap<AccountInfo> = parse(include_str!("../../fixtures/account_info.json"))?;
            infos
                .remove(ACCOUNT_ID)
                .flatten()
                .map(|info| info.statistics.all)
                .ok_or_else(|| anyhow!("no account info"))
        }

        async fn fetch_vehicle_records(&self, _account_id: AccountId) -> Result<Vec<VehiclePlayRecord>> {
            let mut tanks: ResultMap<Vec<AccountTank>> = parse(include_str!("../../fixtures/account_tanks.json"))?;
            Ok(tanks
                .remove(ACCOUNT_ID)
                .flatten()
                .unwrap_or_default()
                .into_iter()
                .map(VehiclePlayRecord::from)
                .collect())
        }

        async fn fetch_vehicle_detail(
            &self,
            _account_id: AccountId,
            tank_ids: &[TankId],
        ) -> Result<Vec<VehicleDetail>> {
            let mut stats: ResultMap<Vec<VehicleDetail>> = parse(include_str!("../../fixtures/tanks_stats.json"))?;
            Ok(stats
                .remove(ACCOUNT_ID)
                .flatten()
                .unwrap_or_default()
                .into_iter()
                .filter(|detail| tank_ids.contains(&detail.tank_id))
                .collect())
        }

        async fn fetch_vehicle_names(&self, _tank_ids: &[TankId]) -> Result<AHashMap<TankId, String>> {
            let vehicles: ResultMap<Vehicle> = parse(include_str!("../../fixtures/encyclopedia_vehicles.json"))?;
            vehicles
                .into_iter()
                .filter_map(|(tank_id, vehicle)| vehicle.map(|vehicle| (tank_id, vehicle.name)))
                .map(|(tank_id, name)| -> Result<(TankId, String)> { Ok((tank_id.parse()?, name)) })
                .collect()
        }
    }

    fn session(options: ScoringOptions) -> Result<ScoringSession<FixtureSource>> {
        let table = reference::parse(include_bytes!("../../fixtures/wn8exp.json"))?;
        Ok(
            ScoringSession::new(FixtureSource, AccountQuery::ByName("FAKE_ACCOUNT".to_string()), options)
                .with_expected_values(Arc::new(table)),
        )
    }

    #[tokio::test]
    async fn reference_account_ok() -> Result {
        let mut session = session(ScoringOptions::default())?;
        let result = session.compute_score().await?;
        assert_eq!(result.score, 2728.0);
        assert_eq!(result.missing, vec![111, 60929]);
        assert!(result.missing_names.is_none());
        assert_eq!(session.resolve_account().await?, 530190876);
        Ok(())
    }

    #[tokio::test]
    async fn reference_account_accurate_ok() -> Result {
        let mut session = session(ScoringOptions {
            accurate: true,
            report_missing: true,
        })?;
        let result = session.compute_score().await?;
        assert_eq!(result.score, 2708.59);
        let names = result
            .missing_names
            .as_ref()
            .ok_or_else(|| anyhow!("names are missing"))?;
        assert_eq!(names.get(&111).map(String::as_str), Some("T-34-1 Bp"));
        assert_eq!(names.get(&60929).map(String::as_str), Some("BZ-176"));
        Ok(())
    }
}
