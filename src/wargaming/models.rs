use std::collections::HashMap;

use serde::Deserialize;

pub use self::account_info::*;
pub use self::realm::*;
pub use self::tank::*;
pub use self::vehicle::*;
pub use crate::wn8::models::{AccountId, TankId};

mod account_info;
mod realm;
mod tank;
mod vehicle;

/// Map of results by account or tank ID, an ID which is not found maps to `null`.
pub type ResultMap<T> = HashMap<String, Option<T>>;

/// Search accounts item.
#[derive(Deserialize, Debug, PartialEq)]
pub struct FoundAccount {
    #[serde(default)]
    pub nickname: String,

    #[serde(rename = "account_id")]
    pub id: AccountId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::wargaming::response::ApiResponse;

    #[test]
    fn found_accounts_ok() -> Result {
        let accounts = Result::<Vec<FoundAccount>>::from(serde_json::from_str::<
            ApiResponse<Vec<FoundAccount>>,
        >(include_str!("../../fixtures/account_list.json"))?)?;
        assert_eq!(
            accounts,
            vec![FoundAccount {
                nickname: "FAKE_ACCOUNT".to_string(),
                id: 530190876,
            }]
        );
        Ok(())
    }

    #[test]
    fn found_asia_account_ok() -> Result {
        let accounts = serde_json::from_str::<Vec<FoundAccount>>(
            // language=json
            r#"[{"nickname":"asia_player","account_id":2500000000}]"#,
        )?;
        assert_eq!(accounts[0].id, 2_500_000_000);
        Ok(())
    }
}
