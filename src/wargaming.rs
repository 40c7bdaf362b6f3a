//! Wargaming.net World of Tanks API client.

use std::collections::HashMap;

use clap::{crate_name, crate_version};
use itertools::Itertools;
use reqwest::Url;
use serde::de::DeserializeOwned;

pub use self::models::*;
use self::response::ApiResponse;
use crate::prelude::*;
use crate::wn8::models::VehicleDetail;

pub mod models;
mod response;
mod source;

#[derive(Clone)]
pub struct WargamingApi {
    application_id: Arc<String>,
    realm: Realm,
    client: reqwest::Client,
}

impl WargamingApi {
    /// Maximum number of tank IDs accepted by a single request.
    const MAX_TANK_IDS: usize = 100;

    pub fn new(application_id: &str, realm: Realm, timeout: StdDuration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(crate_name!(), "/", crate_version!()))
            .timeout(timeout)
            .gzip(true)
            .build()?;
        Ok(Self {
            application_id: Arc::new(application_id.to_string()),
            realm,
            client,
        })
    }

    /// See: <https://developers.wargaming.net/reference/all/wot/account/list/>.
    #[instrument(skip_all, fields(nickname = nickname))]
    pub async fn search_accounts(&self, nickname: &str) -> Result<Vec<FoundAccount>> {
        self.call(self.url(
            "wot/account/list/",
            &[("type", "exact"), ("search", nickname), ("fields", "account_id,nickname")],
        )?)
        .await
    }

    /// See <https://developers.wargaming.net/reference/all/wot/account/info/>.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_account_info(&self, account_id: AccountId) -> Result<Option<AccountInfo>> {
        self.call_by_account(
            "wot/account/info/",
            account_id,
            &[(
                "fields",
                "statistics.all.battles,statistics.all.frags,statistics.all.damage_dealt,\
                 statistics.all.dropped_capture_points,statistics.all.spotted,statistics.all.wins",
            )],
        )
        .await
    }

    /// See <https://developers.wargaming.net/reference/all/wot/account/tanks/>.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub async fn get_account_tanks(&self, account_id: AccountId) -> Result<Vec<AccountTank>> {
        Ok(self
            .call_by_account(
                "wot/account/tanks/",
                account_id,
                &[("fields", "tank_id,statistics.battles")],
            )
            .await?
            .unwrap_or_default())
    }

    /// See <https://developers.wargaming.net/reference/all/wot/tanks/stats/>.
    #[instrument(skip_all, fields(account_id = account_id, n_tanks = tank_ids.len()))]
    pub async fn get_tanks_stats(&self, account_id: AccountId, tank_ids: &[TankId]) -> Result<Vec<VehicleDetail>> {
        let mut stats = Vec::with_capacity(tank_ids.len());
        for chunk in tank_ids.chunks(Self::MAX_TANK_IDS) {
            let tank_id = chunk.iter().join(",");
            let chunk_stats: Option<Vec<VehicleDetail>> = self
                .call_by_account(
                    "wot/tanks/stats/",
                    account_id,
                    &[
                        ("tank_id", tank_id.as_str()),
                        (
                            "fields",
                            "tank_id,all.battles,all.frags,all.damage_dealt,\
                             all.dropped_capture_points,all.spotted,all.wins",
                        ),
                    ],
                )
                .await?;
            stats.extend(chunk_stats.unwrap_or_default());
        }
        Ok(stats)
    }

    /// See <https://developers.wargaming.net/reference/all/wot/encyclopedia/vehicles/>.
    #[instrument(skip_all, fields(n_tanks = tank_ids.len()))]
    pub async fn get_vehicles(&self, tank_ids: &[TankId]) -> Result<AHashMap<TankId, Vehicle>> {
        let mut vehicles = AHashMap::default();
        for chunk in tank_ids.chunks(Self::MAX_TANK_IDS) {
            let tank_id = chunk.iter().join(",");
            let response: ResultMap<Vehicle> = self
                .call(self.url(
                    "wot/encyclopedia/vehicles/",
                    &[("tank_id", tank_id.as_str()), ("fields", "name")],
                )?)
                .await?;
            for (tank_id, vehicle) in response {
                if let Some(vehicle) = vehicle {
                    vehicles.insert(tank_id.parse::<TankId>()?, vehicle);
                }
            }
        }
        Ok(vehicles)
    }

    /// Convenience method for endpoints that return data in the form of a map by account ID.
    async fn call_by_account<T: DeserializeOwned>(
        &self,
        path: &str,
        account_id: AccountId,
        params: &[(&str, &str)],
    ) -> Result<Option<T>> {
        let account_id = account_id.to_string();
        let mut params = params.to_vec();
        params.push(("account_id", account_id.as_str()));
        Ok(self
            .call::<HashMap<String, Option<T>>>(self.url(path, &params)?)
            .await?
            .remove(&account_id)
            .flatten())
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(self.realm.base_url())?.join(path)?;
        url.query_pairs_mut()
            .append_pair("application_id", &self.application_id)
            .extend_pairs(params);
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(path = url.path(), "calling…");
        let start_instant = std::time::Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("request has failed")?
            .error_for_status()?
            .json::<ApiResponse<T>>()
            .await
            .context("could not parse JSON")?;
        debug!(elapsed = ?start_instant.elapsed(), "done");
        response.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_ok() -> Result {
        let api = WargamingApi::new("demo", Realm::Europe, StdDuration::from_secs(10))?;
        let url = api.url("wot/account/list/", &[("type", "exact"), ("search", "FAKE ACCOUNT")])?;
        assert_eq!(
            url.as_str(),
            "https://api.worldoftanks.eu/wot/account/list/?application_id=demo&type=exact&search=FAKE+ACCOUNT",
        );
        Ok(())
    }
}
