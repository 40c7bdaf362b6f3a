//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::prelude::*;
use crate::reference;
use crate::wargaming::Realm;
use crate::wn8::AccountQuery;

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0.0", env = "WN8_TRACES_SAMPLE_RATE")]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Score(ScoreOpts),
    UpdateExpected(UpdateExpectedOpts),
}

/// Calculates WN8 of the account
#[derive(Args)]
pub struct ScoreOpts {
    /// Account ID or the exact nickname
    pub account: String,

    /// Always look the account up by nickname, even if it looks like an account ID
    #[arg(long)]
    pub by_name: bool,

    /// Subtract the vehicles without expected values from the account totals,
    /// costs an additional request
    #[arg(long)]
    pub accurate: bool,

    /// Fetch names of the vehicles without expected values
    #[arg(long)]
    pub report_missing: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub api: ApiOpts,

    #[command(flatten)]
    pub expected_values: ExpectedValuesOpts,

    /// Do not refresh the expected values, use the local copy as is
    #[arg(long)]
    pub offline: bool,

    /// Maximum age of the local copy of the expected values
    #[arg(long, default_value = "1d", value_parser = humantime::parse_duration)]
    pub max_age: StdDuration,
}

impl ScoreOpts {
    pub fn query(&self) -> Result<AccountQuery> {
        if self.by_name {
            Ok(AccountQuery::ByName(self.account.clone()))
        } else {
            parsers::account_query(&self.account)
        }
    }
}

/// Downloads the latest expected values
#[derive(Args)]
pub struct UpdateExpectedOpts {
    #[command(flatten)]
    pub expected_values: ExpectedValuesOpts,

    /// Request timeout
    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration)]
    pub timeout: StdDuration,
}

#[derive(Args)]
pub struct ApiOpts {
    /// Wargaming.net API application ID
    #[arg(short, long, env = "WN8_APPLICATION_ID")]
    pub application_id: String,

    /// Wargaming.net realm
    #[arg(short, long, value_enum, default_value_t = Realm::Europe)]
    pub realm: Realm,

    /// Request timeout
    #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
    pub timeout: StdDuration,
}

#[derive(Args)]
pub struct ExpectedValuesOpts {
    /// Local copy of the expected values
    #[arg(long = "expected-values", default_value = "wn8exp.json", env = "WN8_EXPECTED_VALUES")]
    pub path: PathBuf,

    /// Expected values URL
    #[arg(long = "expected-values-url", default_value = reference::DEFAULT_URL)]
    pub url: String,
}
