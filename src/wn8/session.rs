use std::fmt::{Display, Formatter};

use futures::future::try_join;
use serde::Serialize;

use crate::prelude::{debug, info, instrument, warn, AHashMap, Arc};
use crate::wn8::aggregator::{aggregate, correct, Aggregation};
use crate::wn8::error::{Error, Result};
use crate::wn8::expected::ExpectedValueTable;
use crate::wn8::formula;
use crate::wn8::models::{AccountId, TankId};
use crate::wn8::source::DataSource;

/// Account to score: either the exact nickname or the account ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountQuery {
    ByName(String),
    ById(AccountId),
}

impl Display for AccountQuery {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByName(nickname) => formatter.write_str(nickname),
            Self::ById(account_id) => write!(formatter, "#{}", account_id),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringOptions {
    /// Subtract the vehicles without expected values from the account totals.
    /// Costs an additional request.
    pub accurate: bool,

    /// Fetch the names of the vehicles without expected values.
    pub report_missing: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoringResult {
    pub score: f64,

    /// Vehicles excluded from the calculation.
    pub missing: Vec<TankId>,

    /// Names of the excluded vehicles, when requested and successfully fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_names: Option<AHashMap<TankId, String>>,
}

enum State {
    Uncalculated,
    Calculated(ScoringResult),
    Failed { reason: String },
}

/// Calculates WN8 of a single account.
///
/// The score is calculated at most once: after the first success the session only returns the
/// cached result. Any error is final for the session.
pub struct ScoringSession<S> {
    source: S,
    query: AccountQuery,
    options: ScoringOptions,
    expected_values: Option<Arc<ExpectedValueTable>>,
    account_id: Option<AccountId>,
    state: State,
}

impl<S: DataSource> ScoringSession<S> {
    pub fn new(source: S, query: AccountQuery, options: ScoringOptions) -> Self {
        Self {
            source,
            query,
            options,
            expected_values: None,
            account_id: None,
            state: State::Uncalculated,
        }
    }

    /// Sets the expected values. The table may be shared between any number of sessions.
    #[must_use]
    pub fn with_expected_values(mut self, expected_values: Arc<ExpectedValueTable>) -> Self {
        self.expected_values = Some(expected_values);
        self
    }

    pub fn expected_value_table(&self) -> Result<&ExpectedValueTable> {
        self.expected_values.as_deref().ok_or(Error::DataUnavailable)
    }

    /// Resolves the account ID, looking the nickname up when needed.
    /// If several accounts match the nickname, the first one is used.
    pub async fn resolve_account(&mut self) -> Result<AccountId> {
        if let Some(account_id) = self.account_id {
            return Ok(account_id);
        }
        let account_id = match &self.query {
            AccountQuery::ById(account_id) => *account_id,
            AccountQuery::ByName(nickname) => self
                .source
                .resolve_account(nickname)
                .await?
                .first()
                .copied()
                .ok_or_else(|| Error::AccountNotFound {
                    query: nickname.clone(),
                })?,
        };
        debug!(query = %self.query, account_id, "resolved");
        self.account_id = Some(account_id);
        Ok(account_id)
    }

    #[instrument(level = "info", skip_all, fields(query = %self.query))]
    pub async fn compute_score(&mut self) -> Result<&ScoringResult> {
        if matches!(self.state, State::Uncalculated) {
            match self.calculate().await {
                Ok(result) => {
                    info!(score = result.score, n_missing = result.missing.len(), "calculated");
                    self.state = State::Calculated(result);
                }
                Err(error) => {
                    warn!("failed: {:#}", error);
                    self.state = State::Failed {
                        reason: error.to_string(),
                    };
                    return Err(error);
                }
            }
        }
        match &self.state {
            State::Calculated(result) => Ok(result),
            State::Failed { reason } => Err(Error::SessionFailed {
                reason: reason.clone(),
            }),
            State::Uncalculated => unreachable!("the session must have been calculated"),
        }
    }

    #[must_use]
    pub fn missing_vehicle_ids(&self) -> Option<&[TankId]> {
        self.result().map(|result| result.missing.as_slice())
    }

    #[must_use]
    pub fn missing_vehicle_names(&self) -> Option<&AHashMap<TankId, String>> {
        self.result().and_then(|result| result.missing_names.as_ref())
    }

    fn result(&self) -> Option<&ScoringResult> {
        match &self.state {
            State::Calculated(result) => Some(result),
            _ => None,
        }
    }

    async fn calculate(&mut self) -> Result<ScoringResult> {
        let account_id = self.resolve_account().await?;

        let (mut summary, records) = try_join(
            self.source.fetch_account_summary(account_id),
            self.source.fetch_vehicle_records(account_id),
        )
        .await?;
        debug!(account_id, battles = summary.battles, n_vehicles = records.len(), "fetched");

        // The expected values are only needed when there is something to score.
        if records.is_empty() {
            info!(account_id, "the account has no vehicles");
            return Ok(ScoringResult::default());
        }
        let (sums, missing) = match aggregate(&records, self.expected_value_table()?) {
            Aggregation::Aggregated { sums, missing } => (sums, missing),
            Aggregation::NoPlayData => return Ok(ScoringResult::default()),
        };
        debug!(?sums, n_missing = missing.len(), "aggregated");

        if self.options.accurate && !missing.is_empty() {
            let details = self
                .source
                .fetch_vehicle_detail(account_id, &missing)
                .await?;
            correct(&mut summary, &details);
            debug!(?summary, "corrected");
        }

        let score = formula::score(&summary, &sums)?;

        let missing_names = if self.options.report_missing && !missing.is_empty() {
            match self.source.fetch_vehicle_names(&missing).await {
                Ok(names) => Some(names),
                Err(error) => {
                    warn!(account_id, "failed to fetch the missing vehicle names: {:#}", error);
                    None
                }
            }
        } else {
            None
        };

        Ok(ScoringResult {
            score,
            missing,
            missing_names,
        })
    }
}
