#![warn(clippy::all)]

use clap::{crate_version, Parser};

use crate::opts::{ExpectedValuesOpts, Opts, ScoreOpts, Subcommand, UpdateExpectedOpts};
use crate::prelude::*;
use crate::reference::ExpectedValuesLoader;
use crate::wargaming::WargamingApi;
use crate::wn8::{ExpectedValueTable, ScoringOptions, ScoringSession};

mod helpers;
mod opts;
mod prelude;
mod reference;
mod wargaming;
mod wn8;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    debug!(version = crate_version!(), "starting…");

    let result = match opts.subcommand {
        Subcommand::Score(opts) => score(opts).await,
        Subcommand::UpdateExpected(opts) => update_expected(opts).await,
    };
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}

async fn score(opts: ScoreOpts) -> Result {
    let query = opts.query()?;
    let expected_values = if opts.offline {
        reference::load_file(&opts.expected_values.path).await?
    } else {
        loader(&opts.expected_values, opts.api.timeout)?
            .load(opts.max_age)
            .await?
    };

    let api = WargamingApi::new(&opts.api.application_id, opts.api.realm, opts.api.timeout)?;
    let options = ScoringOptions {
        accurate: opts.accurate,
        report_missing: opts.report_missing,
    };
    let mut session = ScoringSession::new(api, query, options).with_expected_values(Arc::new(expected_values));

    let result = session.compute_score().await?;
    if opts.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("{}", result.score);

    let names = session.missing_vehicle_names();
    for tank_id in session.missing_vehicle_ids().unwrap_or_default() {
        match names.and_then(|names| names.get(tank_id)) {
            Some(name) => println!("missing\t{}\t{}", tank_id, name),
            None => println!("missing\t{}", tank_id),
        }
    }
    Ok(())
}

async fn update_expected(opts: UpdateExpectedOpts) -> Result {
    let table: ExpectedValueTable = loader(&opts.expected_values, opts.timeout)?.update().await?;
    println!("{}", table.len());
    Ok(())
}

fn loader(opts: &ExpectedValuesOpts, timeout: StdDuration) -> Result<ExpectedValuesLoader> {
    ExpectedValuesLoader::new(&opts.url, &opts.path, timeout)
}
