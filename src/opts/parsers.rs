use std::str::FromStr;

use crate::prelude::*;
use crate::wn8::models::AccountId;
use crate::wn8::AccountQuery;

/// A positive number is an account ID, anything else is a nickname.
pub fn account_query(value: &str) -> Result<AccountQuery> {
    let value = value.trim();
    if value.is_empty() {
        return Err(anyhow!("expected an account ID or nickname"));
    }
    match AccountId::from_str(value) {
        Ok(account_id) if account_id >= 1 => Ok(AccountQuery::ById(account_id)),
        Ok(account_id) => Err(anyhow!("{} is an invalid account ID", account_id)),
        Err(_) => Ok(AccountQuery::ByName(value.to_string())),
    }
}
